use crate::cli::prompt::clean_path;
use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn run(output_dir: Option<&str>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = output_dir {
        settings.output_dir = clean_path(dir);
        save_settings(&settings)?;
        println!("Default output directory set to {}", settings.output_dir);
        return Ok(());
    }

    println!("Settings:      {}", settings_path().display());
    println!("Output dir:    {}", settings.output_dir);
    println!(
        "File naming:   \"{}\" -> \"{}\"",
        settings.input_marker, settings.output_marker
    );
    Ok(())
}
