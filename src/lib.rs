//! A keypad calculator: an arithmetic engine, an input reducer that folds
//! key presses into calculator states, and keyboard mirroring for front-ends.

pub mod calculator;
pub mod config;
pub mod keys;
pub mod session;

pub use calculator::{CalculatorState, InputToken, OperatorSymbol, reduce, renderable_text};
pub use config::Config;
pub use session::Session;
