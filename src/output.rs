//! Output delivery — stdout, or a temporary HTML file optionally opened in a
//! browser.

use std::io::Write;
use std::path::PathBuf;

use crate::model::Format;

/// Deliver an assembled document.
///
/// Text and markdown go to stdout. HTML is written to a temporary `.html`
/// file whose location is reported on stderr; with `open_browser` the file is
/// handed to the system opener. Delivery never fails the caller: a browser
/// that will not open is a warning, and a temp file that cannot be written
/// falls back to stdout.
pub fn print_output(doc: &str, format: Format, open_browser: bool) {
    match format {
        Format::Html => deliver_html(doc, open_browser),
        Format::Text | Format::Md => println!("{doc}"),
    }
}

fn deliver_html(doc: &str, open_browser: bool) {
    match write_temp_html(doc) {
        Ok(path) => {
            eprintln!("HTML help written to: file://{}", path.display());
            if open_browser {
                if let Err(e) = opener::open(&path) {
                    eprintln!("warning: could not open web browser: {e}");
                }
            }
        }
        Err(e) => {
            eprintln!("error writing temporary HTML file: {e}");
            println!("{doc}");
        }
    }
}

fn write_temp_html(doc: &str) -> std::io::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("totalhelp-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(doc.as_bytes())?;
    // Keep the file around for the browser; the OS temp cleaner owns it now.
    let (_, path) = file.keep().map_err(|e| e.error)?;
    Ok(path)
}
