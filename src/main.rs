use std::fmt::Display;
use std::io::{BufRead, Write};

use vecmath::{config::palette, cprint, logging, Console, Vector2d, Vector2i};

fn main() -> anyhow::Result<()> {
	dotenvy::dotenv().ok();
	logging::init();

	let mut console = Console::stdio();
	let size = console.size();
	log::info!("terminal reports {size}");

	let rule = "-".repeat(size.width.clamp(1, 60) as usize);
	cprint!(console, rule, "\n")?;

	/*** Lengths and directions ***/
	heading(&mut console, "lengths")?;
	let a = Vector2d::new(3.0, 4.0);
	let b = Vector2d::new(-2.0, 7.5);
	row(&mut console, "a", a)?;
	row(&mut console, "b", b)?;
	row(&mut console, "|a|", a.length())?;
	row(&mut console, "a normalized", a.normalized())?;
	row(&mut console, "a -> b", a.direction_to(b))?;
	row(&mut console, "distance", a.distance_to(b))?;
	row(&mut console, "a . b", a.dot(b))?;
	row(&mut console, "a x b", a.cross(b))?;
	logging::value("a", a);
	logging::value("b", b);

	/*** Interpolation ***/
	heading(&mut console, "interpolation")?;
	for step in 0..=4 {
		let weight = f64::from(step) / 4.0;
		let linear = a.lerp(b, weight);
		let cubic = a.cubic_interpolate(b, Vector2d::LEFT, Vector2d::DOWN * 10.0, weight);
		logging::value("weight", weight);
		cprint!(console, format!("{weight:.2}  "), format!("{linear:.3}  "), format!("{cubic:.3}"), "\n")?;
	}

	/*** Reflection and angles ***/
	heading(&mut console, "bounce")?;
	let incoming = Vector2d::new(1.0, -1.0);
	row(&mut console, "off the floor", incoming.bounce(Vector2d::DOWN))?;
	row(&mut console, "angle (rad)", incoming.angle())?;
	row(&mut console, "from angle", Vector2d::from_angle(incoming.angle()))?;

	/*** Integer grid ***/
	heading(&mut console, "grid")?;
	let cell = Vector2i::new(7, -3);
	row(&mut console, "cell", cell)?;
	row(&mut console, "clamped", cell.clamp(Vector2i::ZERO, Vector2i::new(5, 5)))?;
	row(&mut console, "abs", cell.abs())?;

	/*** Edge cases ***/
	heading(&mut console, "edge cases")?;
	let saturated = a / 0.0;
	if saturated != Vector2d::ZERO || !saturated.is_finite() {
		console.set_color(palette::WARNING)?;
		log::warn!("division by zero did not saturate: {saturated}");
	}
	row(&mut console, "a / 0", saturated)?;
	row(&mut console, "zero normalized", Vector2d::ZERO.normalized())?;
	row(&mut console, "aspect of (1, 0)", Vector2d::RIGHT.aspect())?;

	cprint!(console, rule, "\n")?;
	Ok(())
}

fn heading<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) -> anyhow::Result<()> {
	console.set_color(palette::HEADING)?;
	console.print(text)?;
	console.reset_color()?;
	console.print("\n")
}

fn row<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str, value: impl Display) -> anyhow::Result<()> {
	cprint!(console, format!("  {label:<16}"))?;
	console.set_color(palette::VALUE)?;
	console.print(value)?;
	console.reset_color()?;
	console.print("\n")
}
