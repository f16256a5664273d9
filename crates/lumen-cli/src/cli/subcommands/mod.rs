mod research;

pub use research::{ListArgs, ResearchCommands};
