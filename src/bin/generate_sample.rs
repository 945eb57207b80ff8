use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};

const PROFILES_PATH: &str = "data/BATS_temperature_profiles.csv";
const SST_PATH: &str = "data/OCN330_BATS_SST.csv";
const CONFIG_PATH: &str = "dashboard.json";

/// Temperature at `depth` for a mixed layer of depth `mld` sitting on a
/// smooth thermocline.
fn thermocline(depth: f64, surface: f64, deep: f64, mld: f64, width: f64) -> f64 {
    deep + (surface - deep) / (1.0 + ((depth - mld) / width).exp())
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Two header rows, then `depth, temp, <blank>, depth, temp`. A few cells
/// hold the sentinels real exports contain.
fn write_profiles(path: &str, rng: &mut SimpleRng) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {path}"))?;

    writer.write_record(["Profile 1 (March)", "", "", "Profile 2 (August)", ""])?;
    writer.write_record(["Depth (m)", "Temperature (°C)", "", "Depth (m)", "Temperature (°C)"])?;

    let mut rows = 0;
    for i in 0..=50 {
        let depth = i as f64 * 5.0;
        let winter = thermocline(depth, 19.4, 18.1, 160.0, 25.0) + rng.gauss(0.0, 0.03);
        let summer = thermocline(depth, 27.8, 19.0, 35.0, 12.0) + rng.gauss(0.0, 0.05);

        let temp_1 = if i % 17 == 5 { "--".to_string() } else { format!("{winter:.3}") };
        let depth_2 = if i == 23 { "n/a".to_string() } else { format!("{depth}") };

        writer.write_record([
            format!("{depth}"),
            temp_1,
            String::new(),
            depth_2,
            format!("{summer:.3} °C"),
        ])?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

/// Day offset from September 1 and SST, every third day for a year. The
/// seasonal cycle bottoms out in mid-March (day ~195).
fn write_sst(path: &str, rng: &mut SimpleRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(["Day", "SST (°C)"])?;

    let mut rows = 0;
    for day in (0..365).step_by(3) {
        let phase = 2.0 * PI * (day as f64 - 195.0) / 365.0;
        let sst = 23.2 - 4.1 * phase.cos() + rng.gauss(0.0, 0.25);
        let cell = if day == 99 { String::new() } else { format!("{sst:.2}") };
        writer.write_record([day.to_string(), cell])?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data").context("creating data/")?;
    let profile_rows = write_profiles(PROFILES_PATH, &mut rng)?;
    let sst_rows = write_sst(SST_PATH, &mut rng)?;

    println!("Wrote {profile_rows} profile rows to {PROFILES_PATH}");
    println!("Wrote {sst_rows} SST rows to {SST_PATH}");

    if Path::new(CONFIG_PATH).exists() {
        println!("{CONFIG_PATH} already exists, leaving it untouched");
    } else {
        let config = serde_json::json!({
            "profiles_path": PROFILES_PATH,
            "sst_path": SST_PATH,
        });
        std::fs::write(CONFIG_PATH, serde_json::to_string_pretty(&config)?)
            .with_context(|| format!("writing {CONFIG_PATH}"))?;
        println!("Wrote {CONFIG_PATH} pointing at the sample sources");
    }

    Ok(())
}
