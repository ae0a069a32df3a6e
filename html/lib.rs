use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

/// A node in a rendered document. Components are rendered eagerly by the `html!` macro, so a tree of `Node`s only contains host elements and text.
#[derive(Clone, Debug)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone, Debug)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone, Debug)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, Debug)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => write!(f, "{}", node),
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Option(node) => {
				if let Some(node) = node {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(Some(true)) => {
					write!(f, " {}", key)?;
				}
				AttributeValue::Bool(_) => {}
				AttributeValue::String(Some(value)) => {
					write!(f, " {}=\"", key)?;
					write_escaped(f, value)?;
					f.write_char('"')?;
				}
				AttributeValue::String(None) => {}
			}
		}
		if self.self_closing {
			write!(f, " />")?;
			return Ok(());
		}
		write!(f, ">")?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<bool>> for AttributeValue {
	fn from(value: Option<bool>) -> AttributeValue {
		AttributeValue::Bool(value)
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<RawTextNode> for Node {
	fn from(value: RawTextNode) -> Node {
		Node::RawText(value)
	}
}

impl From<EscapedTextNode> for Node {
	fn from(value: EscapedTextNode) -> Node {
		Node::EscapedText(value)
	}
}

impl From<HostNode> for Node {
	fn from(value: HostNode) -> Node {
		Node::Host(value)
	}
}

impl From<Vec<Node>> for Node {
	fn from(value: Vec<Node>) -> Node {
		Node::Vec(value)
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::EscapedTextNode($t.into())
	};
}

/// Join class names, skipping the ones that are `None`.
#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let classes: Vec<Option<String>> = vec![$($crate::__class_name($class)),*];
		classes.into_iter().flatten().collect::<Vec<String>>().join(" ")
	}};
}

#[doc(hidden)]
pub fn __class_name<T>(class: T) -> Option<String>
where
	T: Into<ClassName>,
{
	class.into().0
}

#[doc(hidden)]
pub struct ClassName(Option<String>);

impl From<&str> for ClassName {
	fn from(value: &str) -> ClassName {
		ClassName(Some(value.to_owned()))
	}
}

impl From<String> for ClassName {
	fn from(value: String) -> ClassName {
		ClassName(Some(value))
	}
}

impl From<Option<&str>> for ClassName {
	fn from(value: Option<&str>) -> ClassName {
		ClassName(value.map(|value| value.to_owned()))
	}
}

impl From<Option<String>> for ClassName {
	fn from(value: Option<String>) -> ClassName {
		ClassName(value)
	}
}

#[test]
fn test_escape_attribute() {
	let node = Node::Host(HostNode {
		name: "a",
		attributes: vec![
			("href", "/?a=1&b=2".into()),
			("hidden", Some(false).into()),
			("title", None::<String>.into()),
		],
		children: vec!["<b>".into()],
		self_closing: false,
	});
	assert_eq!(
		node.render_to_string(),
		r#"<a href="/?a=1&amp;b=2">&lt;b&gt;</a>"#
	);
}

#[test]
fn test_classes() {
	assert_eq!(classes!("page-btn", Some("active")), "page-btn active");
	assert_eq!(classes!("page-btn", None::<&str>), "page-btn");
}
