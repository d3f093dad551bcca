use {
    crate::{
        basis::{Color, Coord, Dim},
        canvas::Canvas,
    },
    anyhow::{bail, ensure, Context, Result},
    std::io::{self, Read},
};

#[cfg(test)]
mod tests;

/// ファイルヘッダと DIB ヘッダを合わせた長さ. ピクセルデータはこれ以降に置かれる.
const HEADERS_LEN: u32 = 54;

fn read_u16(data: &mut impl Read) -> io::Result<u16> {
    let mut buf = [0; 2];
    data.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32(data: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0; 4];
    data.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_i32(data: &mut impl Read) -> io::Result<i32> {
    let mut buf = [0; 4];
    data.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// 無圧縮 24 ビット BMP を読み取って `Canvas` にする.
///
/// ディスク上のピクセルは BGR の順で, 各行は 4 バイト境界までパディングされる.
/// 高さが正なら行は下から上, 負なら上から下に格納されている.
// https://en.wikipedia.org/wiki/BMP_file_format
pub(crate) fn read_bmp(mut data: impl Read) -> Result<Canvas> {
    // check magic number
    let mut magic = [0u8; 2];
    data.read_exact(&mut magic)
        .context("failed to read BMP file header")?;
    if &magic != b"BM" {
        bail!("expected magic number \"BM\", but found {:?}", magic);
    }

    let _file_size = read_u32(&mut data)?;
    let _reserved1 = read_u16(&mut data)?;
    let _reserved2 = read_u16(&mut data)?;
    let offset_data = read_u32(&mut data)?;

    let _dib_size = read_u32(&mut data)?;
    let width = read_i32(&mut data)?;
    let height = read_i32(&mut data)?;
    let _planes = read_u16(&mut data)?;
    let bit_count = read_u16(&mut data)?;
    let compression = read_u32(&mut data)?;
    let _image_size = read_u32(&mut data)?;
    let _x_pixels_per_meter = read_i32(&mut data)?;
    let _y_pixels_per_meter = read_i32(&mut data)?;
    let _colors_used = read_u32(&mut data)?;
    let _colors_important = read_u32(&mut data)?;

    if bit_count != 24 {
        bail!("only 24-bit BMP is supported, but found {} bits", bit_count);
    }
    if compression != 0 {
        bail!(
            "only uncompressed (BI_RGB) BMP is supported, but found compression {}",
            compression
        );
    }
    ensure!(
        width > 0 && height != 0,
        "invalid image dimensions {}x{}",
        width,
        height
    );
    ensure!(
        offset_data >= HEADERS_LEN,
        "pixel data offset {} overlaps the headers",
        offset_data
    );

    // ピクセルデータの先頭まで読み飛ばす
    io::copy(
        &mut data.by_ref().take((offset_data - HEADERS_LEN) as u64),
        &mut io::sink(),
    )?;

    let top_down = height < 0;
    let dim = Dim {
        w: width,
        h: height.abs(),
    };
    let row_padding = (4 - (width as usize * 3) % 4) % 4;
    let mut row = vec![0u8; width as usize * 3 + row_padding];
    let mut canvas = Canvas::new(dim);

    for i in 0..dim.h {
        data.read_exact(&mut row)
            .with_context(|| format!("failed to read pixel row {}", i))?;
        let y = if top_down { i } else { dim.h - 1 - i };
        for (x, pixel) in row.chunks(3).take(width as usize).enumerate() {
            let color = Color {
                r: pixel[2],
                g: pixel[1],
                b: pixel[0],
            };
            canvas.set(Coord { x: x as i32, y }, color);
        }
    }

    Ok(canvas)
}
