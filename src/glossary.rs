//! Weather terms guide shown from the main menu.

/// Term and explanation, in menu order.
pub const TERMS: &[(&str, &str)] = &[
    (
        "Temperature",
        "Temperature refers to how hot or cold the atmosphere is. \
         It is usually measured in degrees Celsius (°C). \
         Higher temperatures indicate warmer weather, while lower values indicate cooler or cold weather.",
    ),
    (
        "Humidity",
        "Humidity is the amount of moisture or water vapor present in the air. \
         It is measured as a percentage (%). \
         High humidity means the air feels sticky and can be uncomfortable, while low humidity makes the air feel dry.",
    ),
    (
        "Wind Speed",
        "Wind speed measures how fast the air is moving. \
         It is typically measured in kilometers per hour (km/h). \
         Higher wind speeds can result in breezy or even stormy conditions.",
    ),
    (
        "Condition",
        "Weather condition describes the overall atmospheric state, such as 'Sunny', 'Rainy', 'Cloudy', 'Snowy', or 'Stormy'. \
         It helps understand what kind of weather to expect visually and physically.",
    ),
];

/// Look up a term by its 1-based menu number.
pub fn by_choice(choice: &str) -> Option<(&'static str, &'static str)> {
    let idx: usize = choice.trim().parse().ok()?;
    idx.checked_sub(1).and_then(|i| TERMS.get(i)).copied()
}
