use std::env;
use std::error::Error;

use compquad::configuration::Configuration;
use compquad::math::integration::director::IntegrationDirector;

const DEFAULT_CONFIG: &str = "json/config.json";

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_owned());
    let config = Configuration::from_reader(&config_path)?;
    let director = IntegrationDirector::all().with_parallel(config.parallel_config().clone());

    for name in config.curve_manager().names() {
        let curve = config.curve(name)?;
        println!("{}: {}", name, curve);
        for report in director.evaluate(curve.as_ref())? {
            println!("  {}", report);
        }
        println!();
    }
    Ok(())
}
