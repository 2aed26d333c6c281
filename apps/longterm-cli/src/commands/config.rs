// config.rs — Settings inspection: `longterm config`, `longterm theme`.

use std::fmt::Write as _;

use longterm_goals::Palette;

use super::Context;

pub fn show_config(ctx: &Context) -> anyhow::Result<()> {
    let source = if ctx.config_path.exists() {
        ctx.config_path.display().to_string()
    } else {
        format!("defaults ({} not found)", ctx.config_path.display())
    };
    println!("# config:   {}", source);
    println!("# data dir: {}", ctx.data_dir.display());
    println!();
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}

pub fn show_theme(ctx: &Context) -> anyhow::Result<()> {
    let palette = ctx.config.theme.palette()?;
    print!("{}", render_palette(&palette));
    Ok(())
}

fn render_palette(palette: &Palette) -> String {
    let mut out = String::new();
    for (name, color) in palette.iter() {
        let (r, g, b) = color.rgb();
        let _ = writeln!(out, "{:<16} {}  rgb({}, {}, {})", name, color, r, g, b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lines_are_sorted_by_name() {
        let text = render_palette(&Palette::ios());
        let names: Vec<&str> = text
            .lines()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(names, vec!["ios-blue", "ios-gray", "ios-green", "ios-red"]);
        assert!(text.contains("#007AFF  rgb(0, 122, 255)"));
    }
}
