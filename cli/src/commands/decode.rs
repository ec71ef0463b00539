use std::{
    io::{stdin, stdout, BufRead, BufWriter, Write},
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Args;
use geodecode_core::{
    format::FormatTag,
    mapper::{FormatMapper, MapperConfig},
};
use humantime::format_duration;
use tracing::info;
use wkt::ToWkt;

use crate::commands::decode_error::IntoDecodeFailure;

/// Decode points from lines read from standard input and write them to
/// standard output as WKT
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// The format of the input lines (see the `formats` command)
    #[arg(short, long, env = "GEODECODE_FORMAT")]
    pub format: FormatTag,

    /// The index of the field holding the x coordinate. Only applies to
    /// delimited formats.
    #[arg(short, long, default_value_t = 0, env = "GEODECODE_START_OFFSET")]
    pub start_offset: usize,

    /// The index after the last coordinate field. Defaults to the field
    /// after the start offset.
    #[arg(long, env = "GEODECODE_END_OFFSET")]
    pub end_offset: Option<usize>,

    /// Append the original input line to every decoded point
    #[arg(short, long, env = "GEODECODE_CARRY_INPUT_DATA")]
    pub carry_input_data: bool,
}

impl From<&DecodeArgs> for MapperConfig {
    fn from(args: &DecodeArgs) -> Self {
        let config = MapperConfig::new(args.format)
            .with_start_offset(args.start_offset)
            .with_carry_input_data(args.carry_input_data);
        match args.end_offset {
            Some(end_offset) => config.with_end_offset(end_offset),
            None => config,
        }
    }
}

/// Run the `decode` command
pub fn run_decode(args: DecodeArgs) -> Result<()> {
    let mapper = FormatMapper::new(MapperConfig::from(&args));

    let decode_start = Instant::now();
    let mut decoded_points = 0;

    let mut read_error = None;
    let lines = stdin()
        .lock()
        .lines()
        .map_while(|l| l.map_err(|e| read_error = Some(e)).ok());

    let mut out = BufWriter::new(stdout().lock());
    let mut decoded = mapper.decode(lines);
    while let Some(r) = decoded.next() {
        let (point, payload) = match r {
            Ok(p) => p.into_parts(),
            Err(err) => {
                out.flush()?;
                let line_number = decoded.lines_read();
                return Err(err.into_decode_failure(line_number, args.format).into());
            }
        };

        write!(out, "{}", point.wkt_string())?;
        if let Some(payload) = payload {
            write!(out, "\t{payload}")?;
        }
        writeln!(out)?;
        decoded_points += 1;
    }
    out.flush()?;

    let lines_read = decoded.lines_read();
    drop(decoded);
    if let Some(err) = read_error {
        return Err(err.into());
    }

    info!(lines_read, decoded_points, "finished decoding");
    eprintln!(
        "Decoded {} points from {} lines in {}",
        decoded_points,
        lines_read,
        format_duration(Duration::from_millis(
            decode_start.elapsed().as_millis() as u64
        ))
    );

    Ok(())
}
