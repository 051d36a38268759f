//! GBDK-2020 C source output: a `.h` header with the asset's declarations and a `.c`
//! source holding the tile data and tile map arrays.
//!
//! For an asset named `Title` in bank 0 made of two identical blank tiles, the source
//! file ends with:
//!
//! ```text
//! const unsigned char BackgroundDataTitle[] =
//! {
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00
//! };
//!
//! const unsigned char BackgroundMapTitle[] =
//! {
//!     0x00, 0x00
//! };
//! ```

use crate::emitter::{write_file, AssetEmitter};
use crate::error::EmitResult;
use gb_tile_export_2bpp_api::{TileAsset, TileSet};
use std::path::{Path, PathBuf};

const SECTION_CONSTANTS: &str =
    "// CONSTANTS ///////////////////////////////////////////////////////////////////\n";

/// Emits GBDK-2020 `.h`/`.c` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GbdkEmitter;

impl AssetEmitter for GbdkEmitter {
    fn format_name(&self) -> &'static str {
        "GBDK-2020 C source"
    }

    fn render(&self, asset: &TileAsset) -> EmitResult<Vec<(String, Vec<u8>)>> {
        let stem = asset.file_stem();
        Ok(vec![
            (format!("{stem}.h"), render_header(asset).into_bytes()),
            (format!("{stem}.c"), render_source(asset).into_bytes()),
        ])
    }
}

/// Writes `<stem>.h` and `<stem>.c` into `folder`.
///
/// # Returns
///
/// The paths of the header and the source file, in that order.
pub fn write_gbdk_files(asset: &TileAsset, folder: &Path) -> EmitResult<(PathBuf, PathBuf)> {
    let stem = asset.file_stem();

    let header_path = folder.join(format!("{stem}.h"));
    write_file(&header_path, render_header(asset).as_bytes())?;

    let source_path = folder.join(format!("{stem}.c"));
    write_file(&source_path, render_source(asset).as_bytes())?;

    Ok((header_path, source_path))
}

/// Renders the `.h` header of an asset.
pub fn render_header(asset: &TileAsset) -> String {
    let name = asset.name();
    let upper = asset.macro_stem();
    let metadata = asset.tiles().metadata();

    let mut out = banner(asset, "h", "header");
    out.push_str("#pragma once\n\n");
    out.push_str(&bank_block(asset, "BANKREF_EXTERN"));
    out.push_str(SECTION_CONSTANTS);
    out.push('\n');
    out.push_str(&format!(
        "#define BACKGROUND_{upper}_TILES {}U /**< How many unique tiles this background has. */\n\n",
        metadata.unique_tile_count
    ));
    out.push_str(&format!(
        "#define BACKGROUND_{upper}_SIZE_X {}U /**< Width of this background, in 8x8 tiles. */\n",
        metadata.tile_width
    ));
    out.push_str(&format!(
        "#define BACKGROUND_{upper}_SIZE_Y {}U /**< Height of this background, in 8x8 tiles. */\n\n",
        metadata.tile_height
    ));
    out.push_str(&format!(
        "/** {name} (data), exported for use with GBDK-2020.\n */\nextern const unsigned char BackgroundData{name}[];\n\n"
    ));
    out.push_str(&format!(
        "/** {name} (map), exported for use with GBDK-2020.\n */\nextern const unsigned char BackgroundMap{name}[];\n"
    ));
    out
}

/// Renders the `.c` source of an asset.
pub fn render_source(asset: &TileAsset) -> String {
    let name = asset.name();

    let mut out = banner(asset, "c", "data");
    out.push_str(&format!("#include \"{}.h\"\n\n", asset.file_stem()));
    out.push_str(&bank_block(asset, "BANKREF"));
    out.push_str(SECTION_CONSTANTS);
    out.push('\n');

    out.push_str(&format!("const unsigned char BackgroundData{name}[] =\n{{\n"));
    out.push_str(&tile_data(asset.tiles()));
    out.push_str("};\n\n");

    out.push_str(&format!("const unsigned char BackgroundMap{name}[] =\n{{\n"));
    out.push_str(&tile_map(asset.tiles()));
    out.push_str("\n};\n");
    out
}

fn banner(asset: &TileAsset, extension: &str, role: &str) -> String {
    let metadata = asset.tiles().metadata();
    format!(
        "/**\n \
         * @file  {stem}.{extension}\n \
         * @brief {name}, exported for use with GBDK-2020 - {role}.\n \
         *\n \
         * Unique tiles  : {unique}\n \
         * Total tiles   : {total}\n \
         * Size (tiles)  : {tw}x{th}\n \
         * Size (pixels) : {pw}x{ph}\n \
         * Bank          : {bank}\n \
         */\n\n",
        stem = asset.file_stem(),
        name = asset.name(),
        unique = metadata.unique_tile_count,
        total = metadata.tile_count_total,
        tw = metadata.tile_width,
        th = metadata.tile_height,
        pw = metadata.pixel_width(),
        ph = metadata.pixel_height(),
        bank = asset.bank(),
    )
}

// Bank 0 needs no bank reference, only the fixed-width integer types.
fn bank_block(asset: &TileAsset, bankref_macro: &str) -> String {
    if asset.options().is_banked() {
        format!(
            "#include <gb/gb.h>\n\n{bankref_macro}(BACKGROUND_{})\n\n",
            asset.macro_stem()
        )
    } else {
        "#include <stdint.h>\n\n".to_owned()
    }
}

/// One canonical tile per line; commas between bytes and between tiles, none after the last.
fn tile_data(tiles: &TileSet) -> String {
    let lines: Vec<String> = tiles
        .table()
        .iter()
        .map(|tile| {
            let bytes: Vec<String> = tile.to_bytes().iter().map(|b| format!("0x{b:02X}")).collect();
            format!("\t{}", bytes.join(", "))
        })
        .collect();

    let mut out = lines.join(",\n");
    out.push('\n');
    out
}

/// One line per tile row of the image.
fn tile_map(tiles: &TileSet) -> String {
    let lines: Vec<String> = tiles
        .map()
        .rows()
        .map(|row| {
            let entries: Vec<String> = row
                .iter()
                .map(|class| format!("0x{:02X}", class.index()))
                .collect();
            format!("\t{}", entries.join(", "))
        })
        .collect();

    lines.join(",\n")
}
