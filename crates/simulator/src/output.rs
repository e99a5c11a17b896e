use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::benchmark::BenchRecord;

pub fn write_records<W: Write>(mut w: W, rows: &[BenchRecord]) -> io::Result<()> {
    writeln!(
        w,
        "algorithm,topology,qubits,reps,parameters,entangling_gates,evaluations,seconds,value"
    )?;
    for r in rows {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{}",
            r.algorithm,
            r.topology,
            r.qubits,
            r.reps,
            r.parameters,
            r.entangling_gates,
            r.evaluations,
            r.seconds,
            r.value
        )?;
    }
    w.flush()
}

pub fn write_csv(path: impl AsRef<Path>, rows: &[BenchRecord]) -> io::Result<()> {
    let f = File::create(path)?;
    write_records(BufWriter::new(f), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows() {
        let rows = [BenchRecord {
            algorithm: "vqe",
            topology: "linear",
            qubits: 3,
            reps: 1,
            parameters: 6,
            entangling_gates: 2,
            evaluations: 1,
            seconds: 0.5,
            value: 7.0,
        }];
        let mut buf = Vec::new();
        write_records(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "vqe,linear,3,1,6,2,1,0.5,7");
    }
}
