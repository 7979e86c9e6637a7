pub mod list;
pub mod printer;
pub mod symbol;
pub mod value;


pub use list::List;
pub use symbol::Symbol;
pub use value::Value;
