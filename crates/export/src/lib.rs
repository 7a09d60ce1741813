//! Export helpers for CSV artifacts.

pub mod sweep {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "diameter_m,velocity_km_s,density_kg_m3,kinetic_energy_j,energy_megatons,crater_diameter_m,crater_depth_m,severity";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub diameter_m: f64,
        pub velocity_km_s: f64,
        pub density_kg_m3: f64,
        pub kinetic_energy_j: f64,
        pub energy_megatons: f64,
        pub crater_diameter_m: f64,
        pub crater_depth_m: f64,
        pub severity: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{:.3},{:.1},{:.6e},{:.6},{:.3},{:.3},{}",
                self.diameter_m,
                self.velocity_km_s,
                self.density_kg_m3,
                self.kinetic_energy_j,
                self.energy_megatons,
                self.crater_diameter_m,
                self.crater_depth_m,
                self.severity,
            )
        }
    }
}
