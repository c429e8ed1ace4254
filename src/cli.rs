use clap::Parser;

/// Localized menu bootstrap for the tauview image viewer.
#[derive(Parser, Debug)]
#[command(name = "tauview", version, about)]
pub struct Cli {
    /// Preferred locale, most preferred first (repeatable); defaults to the system locales
    #[arg(short, long = "lang", value_name = "LOCALE")]
    pub lang: Vec<String>,

    /// Print translation coverage against the fallback locale instead of the menu
    #[arg(long)]
    pub coverage: bool,

    /// Log locale resolution details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
