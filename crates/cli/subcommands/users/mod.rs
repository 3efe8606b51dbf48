mod create;
mod edit;
mod list;

pub use create::create;
pub use edit::edit;
pub use list::list;
