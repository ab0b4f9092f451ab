pub mod checker;
pub mod cliopt;
pub mod error;
pub mod grabber;
pub mod model;
pub mod output;
pub mod runner;
pub mod schema;
pub mod suite;
pub mod validator;
