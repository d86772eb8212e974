use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vidctl")]
#[command(about = "Resolve ffmpeg video controls for a codec selection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every codec with its ffmpeg encoder
    Codecs,

    /// Print a codec's capability descriptor as JSON
    Describe {
        /// Codec label, e.g. "x264" or "HEVC NVENC"
        codec: String,
    },

    /// Resolve the controls for a selection and print the UI state
    Resolve {
        /// Codec label (defaults to the config value)
        #[arg(long)]
        codec: Option<String>,

        /// Quality preset (Auto, Lossless, Custom, High, ...)
        #[arg(long)]
        quality: Option<String>,

        /// Encoding pass (CRF, "1 Pass", "2 Pass")
        #[arg(long)]
        pass: Option<String>,

        /// Optimize preset (None, Custom, Web, ...)
        #[arg(long)]
        optimize: Option<String>,

        /// Output media type (Video, Image, Sequence, Audio)
        #[arg(long)]
        media_type: Option<String>,

        /// Check the VBR box
        #[arg(long)]
        vbr: bool,

        /// Print only the ffmpeg video arguments
        #[arg(long)]
        args: bool,
    },

    /// Create a default config file if one doesn't exist
    InitConfig,
}
