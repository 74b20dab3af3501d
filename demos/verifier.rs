use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};
use std::time::Instant;

use nameseg::NameSegmenter;

fn main() {
    env_logger::init();

    // simple command line interface
    let args: Vec<_> = std::env::args().collect();
    assert!(
        args.len() == 3,
        "should only specify the input file and output file"
    );
    let input_filename = &args[1];
    let output_filename = &args[2];
    let input_file = File::open(input_filename).expect("input file not exists");
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true);
    let output_file = opts.open(output_filename).expect("cannot open output file");
    let mut writer = LineWriter::new(output_file);

    let segmenter = NameSegmenter::new();
    let start = Instant::now();
    let mut total = 0_usize;
    for line in lines {
        let line = line.unwrap();
        match segmenter.parse(&line) {
            Ok(name) => {
                let row = [
                    name.first_name,
                    name.middle_name,
                    name.last_name,
                    name.suffix,
                ]
                .join(",");
                writer.write_all(row.as_bytes()).unwrap();
                writer.write_all(b"\n").unwrap();
                total += 1;
            }
            Err(e) => {
                log::warn!("skipping line: {}", e);
            }
        }
    }
    writer.flush().unwrap();
    log::info!("parsed {} names in {:?}", total, start.elapsed());
}
