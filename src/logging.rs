use std::fmt::Display;

/// Installs `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
pub fn init() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

pub fn value<T: Display>(name: &str, value: T) {
	log::debug!("{name}: {value}");
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vec::Vector2;

	#[test]
	fn value_accepts_vectors_and_scalars() {
		value("position", Vector2::new(1.5, -2.0));
		value("cell", Vector2::new(3u32, 4));
		value("weight", 0.25);
	}
}
