/// build.rs: generate static canonical power tables.
///
/// Emits `$OUT_DIR/pow_tables.rs` which contains:
///   - `POW_TABLE_L` for L = 0..=MAX_TABLE_L (static [[usize; 3]; N])
///   - `pow_table(l) -> Option<&'static [[usize; 3]]>`
///
/// The tables are written with plain nested loops, independently of the
/// in-place enumerator, so the two can be checked against each other.

use std::io::Write;

const MAX_TABLE_L: usize = 7;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").map_err(std::io::Error::other)?;
    let dest = std::path::Path::new(&out_dir).join("pow_tables.rs");
    let mut f = std::io::BufWriter::new(std::fs::File::create(dest)?);

    writeln!(f, "/// Largest degree with a generated static table.")?;
    writeln!(f, "pub const MAX_TABLE_L: usize = {MAX_TABLE_L};\n")?;

    // nx descending, then ny descending within each nx block.
    for l in 0..=MAX_TABLE_L {
        let mut rows = Vec::new();
        for ix in (0..=l).rev() {
            for iy in (0..=(l - ix)).rev() {
                rows.push(format!("[{ix}, {iy}, {}]", l - ix - iy));
            }
        }
        let n = rows.len();
        writeln!(f, "const POW_TABLE_{l}: [[usize; 3]; {n}] = [{}];", rows.join(", "))?;
    }

    writeln!(f)?;
    writeln!(f, "/// Static (nx, ny, nz) rows in canonical order for l = 0..=MAX_TABLE_L.")?;
    writeln!(f, "#[inline]")?;
    writeln!(f, "pub fn pow_table(l: usize) -> Option<&'static [[usize; 3]]> {{")?;
    writeln!(f, "    match l {{")?;
    for l in 0..=MAX_TABLE_L {
        writeln!(f, "        {l} => Some(&POW_TABLE_{l}),")?;
    }
    writeln!(f, "        _ => None,")?;
    writeln!(f, "    }}")?;
    writeln!(f, "}}")?;
    Ok(())
}
