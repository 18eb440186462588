//! Minimal XLSX writer.
//!
//! An XLSX file is a zip archive of XML parts. This writer emits just the
//! parts a single-sheet workbook needs: content types, relationships, the
//! workbook, a style sheet, and one worksheet using inline strings. Styles
//! are fixed and map one-to-one onto [`CellStyle`].

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::export::sheet::{Cell, CellStyle, CellValue, Sheet, COLUMN_COUNT, COLUMN_WIDTH};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// Fixed style sheet. The `cellXfs` order must match [`style_index`]:
/// 0 default, 1 border, 2 title, 3 header, 4 date, 5 menu.
const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<fonts count="3">
<font><sz val="11"/><name val="Calibri"/></font>
<font><b/><sz val="14"/><name val="Calibri"/></font>
<font><b/><sz val="11"/><name val="Calibri"/></font>
</fonts>
<fills count="3">
<fill><patternFill patternType="none"/></fill>
<fill><patternFill patternType="gray125"/></fill>
<fill><patternFill patternType="solid"><fgColor rgb="FFD9E1F2"/><bgColor indexed="64"/></patternFill></fill>
</fills>
<borders count="2">
<border><left/><right/><top/><bottom/><diagonal/></border>
<border><left style="thin"/><right style="thin"/><top style="thin"/><bottom style="thin"/><diagonal/></border>
</borders>
<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
<cellXfs count="6">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
<xf numFmtId="0" fontId="0" fillId="0" borderId="1" applyBorder="1" xfId="0"/>
<xf numFmtId="0" fontId="1" fillId="0" borderId="1" applyFont="1" applyBorder="1" applyAlignment="1" xfId="0"><alignment horizontal="center" vertical="center"/></xf>
<xf numFmtId="0" fontId="2" fillId="0" borderId="1" applyFont="1" applyBorder="1" applyAlignment="1" xfId="0"><alignment horizontal="center"/></xf>
<xf numFmtId="0" fontId="0" fillId="2" borderId="1" applyFill="1" applyBorder="1" applyAlignment="1" xfId="0"><alignment horizontal="center"/></xf>
<xf numFmtId="0" fontId="0" fillId="0" borderId="1" applyBorder="1" applyAlignment="1" xfId="0"><alignment vertical="top" wrapText="1"/></xf>
</cellXfs>
</styleSheet>"#;

/// Style-sheet index for a cell style (see [`STYLES`]).
const fn style_index(style: CellStyle) -> u32 {
    match style {
        CellStyle::Default => 0,
        CellStyle::Border => 1,
        CellStyle::Title => 2,
        CellStyle::Header => 3,
        CellStyle::Date => 4,
        CellStyle::Menu => 5,
    }
}

/// Escapes text for XML content and attribute values.
fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cell reference like `A1`, `D3`. Only the 7 calendar columns are needed,
/// so a single letter always suffices.
fn cell_ref(row: usize, col: usize) -> String {
    debug_assert!(col < 26);
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "\n",
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{name}" sheetId="1" r:id="rId1"/></sheets>"#,
            r#"</workbook>"#
        ),
        name = xml_escape(sheet_name)
    )
}

fn worksheet_xml(sheet: &Sheet) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );
    let _ = write!(
        xml,
        r#"<cols><col min="1" max="{}" width="{}" customWidth="1"/></cols>"#,
        COLUMN_COUNT, COLUMN_WIDTH
    );
    xml.push_str("<sheetData>");
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let _ = write!(xml, r#"<row r="{}">"#, row_idx + 1);
        for (col_idx, cell) in row.iter().enumerate() {
            write_cell(&mut xml, row_idx, col_idx, cell);
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn write_cell(xml: &mut String, row: usize, col: usize, cell: &Cell) {
    let r = cell_ref(row, col);
    let s = style_index(cell.style);
    match &cell.value {
        CellValue::Empty => {
            let _ = write!(xml, r#"<c r="{r}" s="{s}"/>"#);
        }
        CellValue::Text(text) => {
            let _ = write!(
                xml,
                r#"<c r="{r}" s="{s}" t="inlineStr"><is><t>{}</t></is></c>"#,
                xml_escape(text)
            );
        }
        CellValue::Number(n) => {
            let _ = write!(xml, r#"<c r="{r}" s="{s}"><v>{n}</v></c>"#);
        }
    }
}

/// Writes the workbook as an XLSX file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or any zip part fails to
/// write (e.g. the file is locked). This is the one failure path the UI
/// must surface to the user.
pub fn write_workbook(sheet: &Sheet, path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create spreadsheet: {}", path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let parts: [(&str, String); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", workbook_xml(&sheet.name)),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/styles.xml", STYLES.to_string()),
        ("xl/worksheets/sheet1.xml", worksheet_xml(sheet)),
    ];

    for (name, content) in parts {
        zip.start_file(name, options)
            .with_context(|| format!("Failed to start zip entry: {name}"))?;
        zip.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write zip entry: {name}"))?;
    }

    zip.finish()
        .with_context(|| format!("Failed to finalize spreadsheet: {}", path.display()))?;
    Ok(())
}
