use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use house_price_inference::PriceService;

/// One-shot prediction front: `house-price-inference [model-dir] [features-json]`.
///
/// Reads the feature object from the second argument or, if absent, stdin.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let model_dir = args.next().unwrap_or_else(|| "model".to_string());
    let payload = match args.next() {
        Some(inline) => inline,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading features from stdin")?;
            buf
        }
    };

    let features: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&payload).context("features must be a JSON object")?;

    let service = PriceService::load(Path::new(&model_dir));
    if let Some(err) = service.load_error() {
        bail!("cannot load model artifacts from '{model_dir}': {err}");
    }

    let result = service.predict_price(&features)?;
    println!("{} ({} x $100K)", result.display, result.price_units);
    Ok(())
}
