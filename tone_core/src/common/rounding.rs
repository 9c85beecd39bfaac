/// Round to `digits` decimal places with ties going to the even neighbor.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    let floor = scaled.floor();
    let frac = scaled - floor;

    // A true tie survives the scaling exactly (2.5, 3.5, ...); anything else,
    // however close, keeps its nearest neighbor.
    let rounded = if frac == 0.5 {
        if (floor as i64) % 2 == 0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };

    rounded / factor
}

/// Round to 3 decimal places, the precision all aggregate scores are reported at.
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}
