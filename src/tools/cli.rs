use std::io::{self, Error, ErrorKind};
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

use crate::huffman_coding::dictionary::Dictionary;
use crate::tools::report::{code_table, compression_ratio, format_bits, render_tree};

/// What to do once the dictionary is built
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub enum Mode {
    /// Encode a message (the template if none is given) and print the bytes
    Encode {
        /// Message to encode
        message: Option<String>,
    },
    /// Decode hex bytes back into a message
    Decode {
        /// Encoded bytes as hex digits, spaces allowed
        hex: String,
        /// Number of symbols in the message. Without it padding bits may decode as extra symbols.
        #[clap(short = 'n', long)]
        length: Option<usize>,
    },
    /// Print the symbol, frequency and code of every symbol
    Table,
    /// Print the code tree
    Tree,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encode { .. } => write!(f, "Encode"),
            Mode::Decode { .. } => write!(f, "Decode"),
            Mode::Table => write!(f, "Table"),
            Mode::Tree => write!(f, "Tree"),
        }
    }
}

/// Where the symbol counts come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Count the symbols of a message
    Template(String),
    /// Counts given one by one
    Counts(Vec<(char, i64)>),
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds a Huffman code dictionary and encodes or decodes messages with it",
    long_about = "
    The dictionary is built either from the symbol counts of a template message (-t) or from
    explicit counts (-f a=3 -f b=2). The encoded stream carries no header, so decoding needs the
    same template or counts, and ideally the message length."
)]
pub struct Args {
    /// Message the dictionary is built from
    #[clap(short = 't', long = "template", conflicts_with = "freq")]
    template: Option<String>,

    /// Symbol count as <symbol>=<count>, repeat for every symbol
    #[clap(short = 'f', long = "freq")]
    freq: Vec<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,

    #[clap(subcommand)]
    mode: Mode,
}

/// All user settable options
#[derive(Debug)]
pub struct HfmOpts {
    /// Symbol counts for the dictionary
    pub source: Source,
    /// Encode/Decode/Table/Tree
    pub mode: Mode,
    /// Log level
    pub verbose: LevelFilter,
}

impl HfmOpts {
    /// Check the parsed arguments and turn them into options.
    pub fn from_args(args: Args) -> io::Result<Self> {
        let source = match args.template {
            Some(template) => Source::Template(template),
            None if args.freq.is_empty() => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "Either a template (-t) or symbol counts (-f) are needed.",
                ))
            }
            None => Source::Counts(
                args.freq
                    .iter()
                    .map(|f| parse_count(f))
                    .collect::<io::Result<Vec<_>>>()?,
            ),
        };
        let verbose = match args.v {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Ok(Self {
            source,
            mode: args.mode,
            verbose,
        })
    }

    /// Build the dictionary the options describe.
    pub fn dictionary(&self) -> io::Result<Dictionary> {
        let dict = match &self.source {
            Source::Template(template) => Dictionary::from_message(template)?,
            Source::Counts(counts) => Dictionary::from_counts(counts.iter().copied())?,
        };
        Ok(dict)
    }
}

/// Parse the command line, set the log level and report the settings.
pub fn hfmopts_init() -> io::Result<HfmOpts> {
    let opts = HfmOpts::from_args(Args::parse())?;
    log::set_max_level(opts.verbose);

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.mode);
    match &opts.source {
        Source::Template(t) => info!("Counting symbols of a {} char template", t.chars().count()),
        Source::Counts(c) => info!("Using {} given symbol counts", c.len()),
    }
    info!("---- Initialization End ----");
    Ok(opts)
}

/// Carry out the mode and return the text to print.
pub fn run(opts: &HfmOpts) -> io::Result<String> {
    let dict = opts.dictionary()?;
    let out = match &opts.mode {
        Mode::Encode { message } => {
            let message = match (message, &opts.source) {
                (Some(m), _) => m.as_str(),
                (None, Source::Template(t)) => t.as_str(),
                (None, Source::Counts(_)) => {
                    return Err(Error::new(
                        ErrorKind::InvalidInput,
                        "A message is needed when the dictionary is built from counts.",
                    ))
                }
            };
            let encoded = dict.encode(message)?;
            let mut out = format!(
                "{}\n{}\n{} symbols, {} bytes",
                to_hex(&encoded),
                format_bits(&encoded),
                message.chars().count(),
                encoded.len()
            );
            if let Some(ratio) = compression_ratio(&dict, message) {
                out.push_str(&format!(", ratio {:.2}", ratio));
            }
            out
        }
        Mode::Decode { hex, length } => {
            let bytes = parse_hex(hex)?;
            match length {
                Some(n) => dict.decode(&bytes, *n),
                None => dict.decode_all(&bytes),
            }
        }
        Mode::Table => code_table(&dict).trim_end().to_string(),
        Mode::Tree => match dict.root() {
            Some(root) => render_tree(root).trim_end().to_string(),
            None => String::new(),
        },
    };
    Ok(out)
}

/// Parse `<symbol>=<count>`. The symbol is a single char and may itself be '='.
fn parse_count(arg: &str) -> io::Result<(char, i64)> {
    let bad = || Error::new(ErrorKind::InvalidInput, format!("Bad symbol count: {}", arg));
    let mut chars = arg.chars();
    let symbol = chars.next().ok_or_else(bad)?;
    let count = chars.as_str().strip_prefix('=').ok_or_else(bad)?;
    let count = count.trim().parse::<i64>().map_err(|_| bad())?;
    Ok((symbol, count))
}

fn parse_hex(hex: &str) -> io::Result<Vec<u8>> {
    let digits = hex.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(Error::new(ErrorKind::InvalidInput, "Bad hex input."));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::new(ErrorKind::InvalidInput, "Bad hex input."))
        })
        .collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod test {
    use super::*;

    fn opts(args: &[&str]) -> io::Result<HfmOpts> {
        let args = Args::try_parse_from(std::iter::once("huffdict").chain(args.iter().copied()))
            .map_err(|e| Error::new(ErrorKind::InvalidInput, e.to_string()))?;
        HfmOpts::from_args(args)
    }

    #[test]
    fn parse_count_test() {
        assert_eq!(parse_count("a=3").unwrap(), ('a', 3));
        assert_eq!(parse_count("==12").unwrap(), ('=', 12));
        assert_eq!(parse_count("x=-1").unwrap(), ('x', -1));
        assert!(parse_count("a3").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_count("a=three").is_err());
    }

    #[test]
    fn parse_hex_test() {
        assert_eq!(parse_hex("15 80").unwrap(), [0x15, 0x80]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex("158").is_err());
        assert!(parse_hex("zz").is_err());
        assert_eq!(to_hex(&[0x15, 0x80]), "15 80");
    }

    #[test]
    fn encode_template_test() {
        let opts = opts(&["-t", "aaabbc", "encode"]).unwrap();
        assert_eq!(opts.verbose, LevelFilter::Warn);
        let out = run(&opts).unwrap();
        assert!(out.starts_with("15 80\n0001 0101  1000 0000\n6 symbols, 2 bytes"));
    }

    #[test]
    fn decode_counts_test() {
        let opts = opts(&["-f", "a=3", "-f", "b=2", "-f", "c=1", "decode", "1580", "-n", "6"]).unwrap();
        assert_eq!(opts.source, Source::Counts(vec![('a', 3), ('b', 2), ('c', 1)]));
        assert_eq!(run(&opts).unwrap(), "aaabbc");
    }

    #[test]
    fn decode_without_length_test() {
        let opts = opts(&["-t", "aaabbc", "decode", "15 80"]).unwrap();
        assert_eq!(run(&opts).unwrap(), "aaabbcaaaaaaa");
        let opts = self::opts(&["-t", "ab", "decode", "00", "-n", "18446744073709551615"]).unwrap();
        assert_eq!(run(&opts).unwrap(), "aaaaaaaa");
    }

    #[test]
    fn table_and_tree_test() {
        let table = run(&opts(&["-t", "aaabbc", "table"]).unwrap()).unwrap();
        assert_eq!(table.lines().count(), 4);
        let tree = run(&opts(&["-v5", "-t", "aaabbc", "tree"]).unwrap()).unwrap();
        assert!(tree.starts_with("root: (6)"));
    }

    #[test]
    fn errors_test() {
        assert!(opts(&["table"]).is_err());
        assert!(opts(&["-t", "ab", "-f", "a=1", "table"]).is_err());
        let bad = opts(&["-f", "a=0", "-f", "b=1", "table"]).unwrap();
        assert_eq!(run(&bad).unwrap_err().kind(), ErrorKind::InvalidData);
        let huge = opts(&["-f", "a=9223372036854775807", "-f", "a=1", "table"]).unwrap();
        assert_eq!(run(&huge).unwrap_err().kind(), ErrorKind::InvalidData);
        let unknown = opts(&["-t", "abc", "encode", "abz"]).unwrap();
        let err = run(&unknown).unwrap_err();
        assert!(err.to_string().contains("'z'"));
        let no_message = opts(&["-f", "a=1", "encode"]).unwrap();
        assert!(run(&no_message).is_err());
    }
}
