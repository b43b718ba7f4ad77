use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use color_print::ceprintln;
use wsasm::asm::Assembler;
use wsasm::error::Error;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (`-` reads stdin)
    #[clap(default_value = "-")]
    input: String,

    /// Output file (`-` writes stdout)
    #[clap(short, long, default_value = "-")]
    output: String,

    /// List assembled lines and label assignments on stderr
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            ceprintln!("<red,bold>error</>: {}", err);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, Error> {
    let stdin = std::io::stdin();
    let reader: Box<dyn BufRead> = if args.input == "-" {
        Box::new(stdin.lock())
    } else {
        let file =
            File::open(&args.input).map_err(|err| Error::FileOpen(args.input.clone(), err))?;
        Box::new(BufReader::new(file))
    };
    let mut writer: Box<dyn Write> = if args.output == "-" {
        Box::new(std::io::stdout().lock())
    } else {
        let file =
            File::create(&args.output).map_err(|err| Error::FileCreate(args.output.clone(), err))?;
        Box::new(BufWriter::new(file))
    };

    let mut asm = Assembler::new();
    asm.assemble(&args.input, reader, &mut writer, args.dump)?;
    writer.flush().map_err(Error::FileWrite)?;

    for diag in asm.diags() {
        eprintln!("{}", diag);
    }
    Ok(asm.success())
}
