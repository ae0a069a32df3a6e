/// The scroll-to-top button is shown once the page is scrolled past `threshold` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToTop {
	threshold: f64,
}

impl ScrollToTop {
	pub fn new(threshold: f64) -> ScrollToTop {
		ScrollToTop { threshold }
	}

	pub fn is_visible(&self, scroll_y: f64) -> bool {
		scroll_y > self.threshold
	}

	/// The value of the button's `display` style.
	pub fn display(&self, scroll_y: f64) -> &'static str {
		if self.is_visible(scroll_y) {
			"block"
		} else {
			"none"
		}
	}
}

#[test]
fn test_threshold() {
	let scroll_to_top = ScrollToTop::new(300.0);
	assert_eq!(scroll_to_top.display(0.0), "none");
	assert_eq!(scroll_to_top.display(300.0), "none");
	assert_eq!(scroll_to_top.display(300.5), "block");
}
