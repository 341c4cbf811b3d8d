//! ImageMagick post-processing of the chrome screenshot.

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Converter used unless configured otherwise.
pub const DEFAULT_CONVERTER: &str = "convert";

/// Build a `convert` command that crops the screenshot to its visible area
/// and writes `output_type` data to stdout.
///
/// Png keeps the transparent background; every other type is flattened onto
/// white with the alpha channel dropped.
pub fn trim_command(converter: &Path, screenshot: &Path, output_type: &str) -> Command {
    let mut cmd = Command::new(converter);
    cmd.arg(screenshot).arg("-trim").arg("+repage");

    if output_type != "png" {
        cmd.args(["-background", "white", "-flatten", "-alpha", "off"]);
    }

    cmd.arg(format!("{}:-", output_type));
    cmd
}

/// Trim the screenshot and return the converted image bytes.
pub fn trim_image(converter: &Path, screenshot: &Path, output_type: &str) -> Result<Vec<u8>> {
    let mut cmd = trim_command(converter, screenshot, output_type);
    log::debug!("converting screenshot: {:?}", cmd);

    let tool = converter.display().to_string();
    let output = cmd.output().map_err(|source| Error::Launch {
        tool: tool.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(Error::tool_failed(&tool, output.status, &output.stderr));
    }

    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn png_keeps_alpha() {
        let cmd = trim_command(Path::new("convert"), Path::new("/w/screenshot.png"), "png");
        assert_eq!(args_of(&cmd), vec!["/w/screenshot.png", "-trim", "+repage", "png:-"]);
    }

    #[test]
    fn other_types_are_flattened() {
        for typ in ["jpg", "jpeg", "pdf", "PNG"] {
            let cmd = trim_command(Path::new("convert"), Path::new("/w/screenshot.png"), typ);
            assert_eq!(
                args_of(&cmd),
                vec![
                    "/w/screenshot.png".to_string(),
                    "-trim".into(),
                    "+repage".into(),
                    "-background".into(),
                    "white".into(),
                    "-flatten".into(),
                    "-alpha".into(),
                    "off".into(),
                    format!("{}:-", typ),
                ]
            );
        }
    }

    #[test]
    fn missing_converter_is_launch_error() {
        let err = trim_image(
            Path::new("/nonexistent/rfrender-convert"),
            Path::new("screenshot.png"),
            "png",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }
}
