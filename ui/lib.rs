mod alert;
mod button;
mod layout;
mod link;
mod side_nav;
mod stat;

pub use self::alert::*;
pub use self::button::*;
pub use self::layout::*;
pub use self::link::*;
pub use self::side_nav::*;
pub use self::stat::*;
