use neo_impact_calculator::export::sweep;
use neo_impact_calculator::impact::{Impactor, compute_impact};
use std::fs;
use std::io::Write;

#[test]
fn sweep_csv_has_header_and_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out").join("sweep.csv");

    {
        let mut writer = sweep::writer_for_path(&path).expect("create writer");
        sweep::write_header(writer.as_mut()).unwrap();

        let impactor = Impactor::rocky(100.0, 20.0);
        let impact = compute_impact(&impactor).unwrap();
        sweep::Record {
            diameter_m: impactor.diameter_m,
            velocity_km_s: impactor.velocity_km_s,
            density_kg_m3: impactor.density_kg_m3,
            kinetic_energy_j: impact.kinetic_energy_j,
            energy_megatons: impact.energy_megatons,
            crater_diameter_m: impact.crater_diameter_m,
            crater_depth_m: impact.crater_depth_m,
            severity: impact.severity.label(),
        }
        .write_to(writer.as_mut())
        .unwrap();
        writer.flush().unwrap();
    }

    let contents = fs::read_to_string(&path).expect("read CSV back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "diameter_m,velocity_km_s,density_kg_m3,kinetic_energy_j,energy_megatons,crater_diameter_m,crater_depth_m,severity"
    );
    assert!(lines[1].starts_with("100.000,20.000,2600.0,"));
    assert!(lines[1].ends_with(",significant"));
    assert!(lines[1].contains(",65.074418,2000.000,500.000,"));
}
