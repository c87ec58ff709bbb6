use std::fs;
use std::io::Write;

use color_print::cprintln;

use hackasm::error::{Diag, Error};
use hackasm::{codegen, labels, parser, symbols::Symbols, util};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file (defaults to the input with a `.hack` extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the listing and symbol table
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(diag) = run(&args) {
        diag.print();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Diag> {
    let source =
        fs::read_to_string(&args.input).map_err(|e| Error::FileOpen(args.input.clone(), e))?;
    let lines = parser::parse_lines(&args.input, &source);

    let mut symbols = Symbols::new();
    labels::collect_labels(&lines, &mut symbols);
    let words = codegen::generate(&lines, &mut symbols)?;

    // nothing is written until the whole program has encoded
    let out_path = match &args.output {
        Some(path) => path.clone(),
        None => hack_name(&args.input),
    };
    let mut out =
        fs::File::create(&out_path).map_err(|e| Error::FileCreate(out_path.clone(), e))?;
    for word in &words {
        writeln!(out, "{:016b}", word).map_err(|e| Error::FileWrite(out_path.clone(), e))?;
    }
    cprintln!(
        "<green>{}</> -> <green>{}</> ({} words)",
        args.input,
        out_path,
        words.len()
    );

    if args.dump {
        util::print_dump(&lines, &words, &symbols);
    }
    Ok(())
}

/// `foo/bar.asm` -> `foo/bar.hack`
fn hack_name(input: &str) -> String {
    std::path::Path::new(input)
        .with_extension("hack")
        .to_string_lossy()
        .into_owned()
}
