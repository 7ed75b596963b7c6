pub mod lexer;

pub mod operators;

pub mod shunting_yard;

pub mod tokens;

pub use lexer::*;
pub use operators::*;
pub use shunting_yard::ShuntingYard;
pub use tokens::*;
