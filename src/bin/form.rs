//! Interactive form: asks for a name and an email, then prints the sanitized
//! record. Loops until the input is accepted.

use anyhow::Result;
use dotenv::dotenv;
use user_input::form::prompt_user_input;
use user_input::processing::process_user_input;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    println!("Please enter your details.");

    loop {
        let input = prompt_user_input()?;

        match process_user_input(&input) {
            Ok(sanitized) => {
                println!("{}", serde_json::to_string_pretty(&sanitized)?);
                return Ok(());
            }
            Err(errors) => {
                println!("Your input could not be accepted:");
                for error in &errors {
                    println!("- {}: {}", error.field(), error.message());
                }
            }
        }
    }
}
