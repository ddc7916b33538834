use clap::{Parser, ValueEnum};
use devconsts::OutputFormat;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Format {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "devconsts")]
#[command(version)]
#[command(about = "Print Linux open-flag, block-device and spidev ioctl constants")]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also print O_WRONLY, O_APPEND and the common errno values
    #[arg(long)]
    pub extended: bool,

    /// Follow each ioctl request code with its dir/type/nr/size fields (text only)
    #[arg(long)]
    pub decode: bool,

    /// Print only this constant, e.g. --only 'SPI_IOC_MESSAGE(2)' (repeatable)
    #[arg(long, value_name = "LABEL")]
    pub only: Vec<String>,
}
