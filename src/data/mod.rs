mod loader;

pub use loader::{
    LoadError, default_questions, load_questions_from_json, parse_questions, validate_bank,
};
