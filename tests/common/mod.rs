use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_requests(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["currency", "amount"])?;
    for (currency, amount) in rows {
        wtr.write_record([currency, amount])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `rows` random USD/GBP requests and returns them in file order.
pub fn generate_random_requests(
    path: &Path,
    rows: usize,
    seed: u64,
) -> Result<Vec<(String, u64)>, Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let requests: Vec<(String, u64)> = (0..rows)
        .map(|_| {
            let currency = if rng.gen_bool(0.5) { "USD" } else { "GBP" };
            (currency.to_string(), rng.gen_range(0..100_000))
        })
        .collect();

    let amounts: Vec<String> = requests.iter().map(|(_, a)| a.to_string()).collect();
    let rows: Vec<(&str, &str)> = requests
        .iter()
        .zip(&amounts)
        .map(|((currency, _), amount)| (currency.as_str(), amount.as_str()))
        .collect();
    write_requests(path, &rows)?;

    Ok(requests)
}
