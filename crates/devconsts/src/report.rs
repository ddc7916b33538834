//! Rendering of constant tables to text or JSON.

use std::io::{self, Write};

use ioctl_abi::{IoctlCode, Layout};
use log::trace;
use serde::Serialize;

use crate::table::{ConstKind, NamedConstant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<label> = 0x<hex> (<decimal>) ` per line.
    #[default]
    Text,
    Json,
}

/// Format one constant as `<label> = 0x<hex> (<decimal>) `.
///
/// The trailing space is part of the format.
pub fn render_line(constant: &NamedConstant) -> String {
    format!(
        "{} = {:#x} ({}) ",
        constant.label, constant.value, constant.value
    )
}

/// Indented field breakdown of an ioctl request code.
pub fn render_decoded(code: u32) -> String {
    render_decoded_in(&Layout::TARGET, code)
}

/// [`render_decoded`] for an explicit ioctl layout.
pub fn render_decoded_in(layout: &Layout, code: u32) -> String {
    let fields = layout.decode(code);
    format!(
        "    dir={} type={:#x} nr={} size={}",
        direction_label(layout, &fields),
        fields.ty,
        fields.nr,
        fields.size
    )
}

/// Named direction, or the raw bits when the layout does not define them.
fn direction_label(layout: &Layout, fields: &IoctlCode) -> String {
    layout
        .direction(fields.dir)
        .map_or_else(|| format!("{:#x}", fields.dir), |d| d.to_string())
}

pub fn write_text<'a, W, I>(out: &mut W, constants: I, decode: bool) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a NamedConstant>,
{
    for constant in constants {
        trace!("{} -> {:#x}", constant.label, constant.value);
        writeln!(out, "{}", render_line(constant))?;
        if decode && constant.kind == ConstKind::Ioctl {
            writeln!(out, "{}", render_decoded(constant.value))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonIoctl {
    dir: String,
    #[serde(rename = "type")]
    ty: u32,
    nr: u32,
    size: u32,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    label: &'a str,
    value: u32,
    hex: String,
    kind: ConstKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    ioctl: Option<JsonIoctl>,
}

impl<'a> From<&'a NamedConstant> for JsonEntry<'a> {
    fn from(constant: &'a NamedConstant) -> Self {
        let ioctl = (constant.kind == ConstKind::Ioctl).then(|| {
            let fields = IoctlCode::decode(constant.value);
            JsonIoctl {
                dir: direction_label(&Layout::TARGET, &fields),
                ty: fields.ty,
                nr: fields.nr,
                size: fields.size,
            }
        });
        Self {
            label: constant.label,
            value: constant.value,
            hex: format!("{:#x}", constant.value),
            kind: constant.kind,
            ioctl,
        }
    }
}

/// Write the constants as a pretty-printed JSON array.
pub fn write_json<'a, W, I>(out: &mut W, constants: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a NamedConstant>,
{
    let entries: Vec<JsonEntry<'_>> = constants.into_iter().map(JsonEntry::from).collect();
    serde_json::to_writer_pretty(&mut *out, &entries).map_err(io::Error::from)?;
    writeln!(out)
}

pub fn write_report<'a, W, I>(
    out: &mut W,
    constants: I,
    format: OutputFormat,
    decode: bool,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a NamedConstant>,
{
    match format {
        OutputFormat::Text => write_text(out, constants, decode),
        OutputFormat::Json => write_json(out, constants),
    }
}
