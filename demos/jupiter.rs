use tidal_love::io::csv;
use tidal_love::love::{love_number, relative_error};
use tidal_love::{models, LoveError};

fn main() -> tidal_love::Result<()> {
    let profile = models::polytrope_n1(4096)?;

    println!("Integrating n=1 polytrope with {} samples ...", profile.len());
    let shells = profile.integrate()?;
    let surface = shells.last().ok_or(LoveError::TooFewPoints { len: shells.len() })?;
    let k2 = love_number(surface.eta)?;
    let expected = models::polytrope_n1_k2();

    println!("k2: {:.6} (analytic {:.6}, err {:.2e})", k2, expected, relative_error(k2, expected));
    println!("Surface eta: {:.6}", surface.eta);
    // mass is in units of density * R^3
    let mass = 4.0 * std::f64::consts::PI / 3.0 * surface.mass * surface.radius.powi(3);
    println!("Total mass: {:.4e} kg", mass);

    csv::write_trajectory_file("jupiter_trajectory.csv", &shells)?;
    Ok(())
}
