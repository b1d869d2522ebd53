pub mod output;
pub mod prompts;
pub mod shell;
