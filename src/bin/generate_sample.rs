//! Writes a small synthetic `Titanic-Dataset.csv` into the working
//! directory so the viewer can be tried without the real Kaggle file. The
//! generated data is deterministic and carries the same missing-value
//! pattern the analysis expects (gaps in Age, Cabin, Embarked).

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
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick(&mut self, options: &[&'static str], weights: &[f64]) -> &'static str {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (option, w) in options.iter().zip(weights) {
            if roll < *w {
                return option;
            }
            roll -= w;
        }
        options[options.len() - 1]
    }
}

const SURNAMES: [&str; 8] = [
    "Carter", "Holm", "Navarro", "Okafor", "Lindqvist", "Moreau", "Petrov", "Keane",
];
const MALE_NAMES: [&str; 6] = ["James", "Thomas", "Henrik", "Louis", "Pavel", "Owen"];
const FEMALE_NAMES: [&str; 6] = ["Mary", "Elsa", "Ines", "Adaeze", "Vera", "Nora"];

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_rows = 200;

    let output_path = "Titanic-Dataset.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "PassengerId",
            "Survived",
            "Pclass",
            "Name",
            "Sex",
            "Age",
            "SibSp",
            "Parch",
            "Ticket",
            "Fare",
            "Cabin",
            "Embarked",
        ])
        .expect("Failed to write header");

    for id in 1..=n_rows {
        let pclass = rng.pick(&["1", "2", "3"], &[0.24, 0.21, 0.55]);
        let sex = rng.pick(&["male", "female"], &[0.65, 0.35]);

        // survival odds rise with class and being female
        let base = match pclass {
            "1" => 0.45,
            "2" => 0.30,
            _ => 0.18,
        };
        let p_survive = if sex == "female" { base + 0.35 } else { base - 0.08 };
        let survived = if rng.next_f64() < p_survive { 1 } else { 0 };

        let surname = SURNAMES[(rng.next_u64() % SURNAMES.len() as u64) as usize];
        let name = if sex == "male" {
            let given = MALE_NAMES[(rng.next_u64() % MALE_NAMES.len() as u64) as usize];
            format!("{surname}, Mr. {given}")
        } else {
            let given = FEMALE_NAMES[(rng.next_u64() % FEMALE_NAMES.len() as u64) as usize];
            format!("{surname}, Mrs. {given}")
        };

        // roughly a fifth of ages are missing, as in the real file
        let age = if rng.next_f64() < 0.2 {
            String::new()
        } else {
            format!("{:.1}", rng.gauss(29.7, 14.0).clamp(0.4, 80.0))
        };

        let sibsp = (rng.next_u64() % 3).min(2);
        let parch = (rng.next_u64() % 3).min(2);
        let ticket = format!("{}", 100000 + rng.next_u64() % 300000);

        // fares skew right, higher classes pay more
        let fare_scale = match pclass {
            "1" => 60.0,
            "2" => 20.0,
            _ => 10.0,
        };
        let fare = fare_scale * (-rng.next_f64().max(1e-9).ln());

        let cabin = if rng.next_f64() < 0.23 {
            format!("C{}", 1 + rng.next_u64() % 120)
        } else {
            String::new()
        };
        let embarked = if rng.next_f64() < 0.005 {
            ""
        } else {
            rng.pick(&["S", "C", "Q"], &[0.72, 0.19, 0.09])
        };

        writer
            .write_record([
                id.to_string(),
                survived.to_string(),
                pclass.to_string(),
                name,
                sex.to_string(),
                age,
                sibsp.to_string(),
                parch.to_string(),
                ticket,
                format!("{fare:.4}"),
                cabin,
                embarked.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} passengers to {output_path}");
}
