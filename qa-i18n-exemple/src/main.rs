use env_logger::Env;
use log::info;
use qa_i18n_core::{
    CharacterClass, Exclusion, I18nError, TestStringsInput, get_i18n_string, get_test_string, random_alpha_numeric,
    random_english_sentence, random_multi_lang, random_multi_lang_sentence, run_i18n_strings, test_i18n_strings,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Debug records show the random seed of every call, so a run can be replayed
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    info!("qa-i18n-core {}", qa_i18n_core::VERSION);

    // Every character of a class, looked up by name
    let class: CharacterClass = "german".parse()?;
    println!("{}: {}", class, get_i18n_string(class));

    // A short mixed string for quick smoke tests
    println!("Test string: {}", get_test_string(5));

    // Random values; pass a seed to get the same value back
    println!("Multi lang: {}", random_multi_lang(20, None));
    println!("Multi lang (seed 42): {}", random_multi_lang(20, Some(42)));
    println!("Alpha numeric: {}", random_alpha_numeric(12, None));
    println!("English sentence: {}", random_english_sentence(40, None)?);
    println!("Multi lang sentence: {}", random_multi_lang_sentence(40, Some(7))?);

    // Sentences need at least one character and the period
    match random_english_sentence(1, None) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Length 1 is invalid: {e}"),
    }

    // Feed every i18n class to a check, here a simulated "user name" field
    // that rejects white space
    test_i18n_strings(8, &[Exclusion::WhiteSpace], |string| {
        println!("Creating user 'User{string}'");
    })?;

    // Same driver with reusable settings and a check that can fail
    let input = TestStringsInput::new(4)?.exclude(Exclusion::Syntax);
    let result = run_i18n_strings(&input, |string| {
        if string.chars().all(char::is_whitespace) {
            return Err(I18nError::InvalidArgument(format!("blank name {string:?}")));
        }
        Ok(())
    });
    if let Err(e) = result {
        println!("Check failed: {e}");
    }

    Ok(())
}
