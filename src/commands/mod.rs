// entry program
pub mod vtbgen;

// informational content for help about commands
mod helps;
