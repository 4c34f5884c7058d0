//! The `quizkeep init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizkeep.toml
    if std::path::Path::new("quizkeep.toml").exists() {
        println!("quizkeep.toml already exists, skipping.");
    } else {
        std::fs::write("quizkeep.toml", SAMPLE_CONFIG)?;
        println!("Created quizkeep.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.json");
    if example_path.exists() {
        println!("quizzes/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizkeep validate quizzes/example.json");
    println!("  2. Run: quizkeep import quizzes/example.json");
    println!("  3. Run: quizkeep play rust-basics");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizkeep configuration

# Where quiz data is stored. Overridden by QUIZKEEP_DATA_DIR or --data-dir.
data_dir = ".quizkeep"

# "file" keeps quizzes between runs, "memory" forgets them on exit.
store = "file"
store_file = "store.json"
"#;

const EXAMPLE_QUIZ: &str = r#"{
  "quizId": "rust-basics",
  "title": "Rust Basics",
  "description": "A short warm-up on ownership and types",
  "questions": [
    {
      "id": "immutable-binding",
      "question": "Which keyword declares a variable binding?",
      "type": "single-choice",
      "options": [
        { "key": "A", "text": "let" },
        { "key": "B", "text": "var" },
        { "key": "C", "text": "def" }
      ],
      "correctAnswers": ["A"],
      "explanation": "Bindings are introduced with `let` and are immutable unless marked `mut`."
    },
    {
      "id": "copy-types",
      "question": "Which of these types implement Copy?",
      "type": "multiple-choice",
      "options": [
        { "key": "A", "text": "i32" },
        { "key": "B", "text": "String" },
        { "key": "C", "text": "bool" },
        { "key": "D", "text": "Vec<u8>" }
      ],
      "correctAnswers": ["A", "C"],
      "explanation": "Heap-owning types like String and Vec are moved, not copied."
    },
    {
      "id": "borrow-rule",
      "question": "How many mutable references to a value may exist at once?",
      "type": "single-choice",
      "options": [
        { "key": "A", "text": "Any number" },
        { "key": "B", "text": "Exactly one" },
        { "key": "C", "text": "One per thread" }
      ],
      "correctAnswers": ["B"]
    }
  ]
}
"#;
