use {
    super::read_bmp,
    crate::basis::{Color, Coord},
    std::io::Cursor,
};

/// テスト用の BMP ヘッダ 54 バイトを組み立てる.
fn headers(magic: &[u8; 2], width: i32, height: i32, bit_count: u16, compression: u32) -> Vec<u8> {
    let mut data = vec![];
    data.extend_from_slice(magic);
    data.extend_from_slice(&0u32.to_le_bytes()); // file size (未使用)
    data.extend_from_slice(&0u16.to_le_bytes()); // reserved1
    data.extend_from_slice(&0u16.to_le_bytes()); // reserved2
    data.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
    data.extend_from_slice(&40u32.to_le_bytes()); // DIB header size
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // planes
    data.extend_from_slice(&bit_count.to_le_bytes());
    data.extend_from_slice(&compression.to_le_bytes());
    data.extend_from_slice(&[0; 20]); // image size, 解像度, パレット数
    assert_eq!(data.len(), 54);
    data
}

#[test]
fn decodes_bottom_up_bgr_rows_with_padding() {
    let mut data = headers(b"BM", 2, 2, 24, 0);
    // 幅 2 の行は 6 バイトなので 2 バイトのパディングが付く.
    // 先に格納されるのは画像の一番下の行.
    data.extend_from_slice(&[3, 2, 1, 6, 5, 4, 0, 0]); // y = 1
    data.extend_from_slice(&[9, 8, 7, 12, 11, 10, 0, 0]); // y = 0

    let canvas = read_bmp(Cursor::new(data)).unwrap();

    assert_eq!(canvas.dim().w, 2);
    assert_eq!(canvas.dim().h, 2);
    // ディスク上の BGR が RGB に直っている
    assert_eq!(canvas.get(Coord { x: 0, y: 1 }), Color { r: 1, g: 2, b: 3 });
    assert_eq!(canvas.get(Coord { x: 1, y: 1 }), Color { r: 4, g: 5, b: 6 });
    assert_eq!(canvas.get(Coord { x: 0, y: 0 }), Color { r: 7, g: 8, b: 9 });
    assert_eq!(
        canvas.get(Coord { x: 1, y: 0 }),
        Color { r: 10, g: 11, b: 12 }
    );
}

#[test]
fn decodes_top_down_rows_on_negative_height() {
    let mut data = headers(b"BM", 1, -2, 24, 0);
    data.extend_from_slice(&[3, 2, 1, 0]); // y = 0
    data.extend_from_slice(&[6, 5, 4, 0]); // y = 1

    let canvas = read_bmp(Cursor::new(data)).unwrap();

    assert_eq!(canvas.dim().h, 2);
    assert_eq!(canvas.get(Coord { x: 0, y: 0 }), Color { r: 1, g: 2, b: 3 });
    assert_eq!(canvas.get(Coord { x: 0, y: 1 }), Color { r: 4, g: 5, b: 6 });
}

#[test]
fn rejects_wrong_magic_number() {
    let mut data = headers(b"PM", 2, 2, 24, 0);
    data.extend_from_slice(&[0; 16]);

    let result = read_bmp(Cursor::new(data));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("magic number"));
}

#[test]
fn rejects_unsupported_bit_depth() {
    let mut data = headers(b"BM", 2, 2, 32, 0);
    data.extend_from_slice(&[0; 16]);

    let result = read_bmp(Cursor::new(data));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("24-bit"));
}

#[test]
fn rejects_compressed_pixel_data() {
    let mut data = headers(b"BM", 2, 2, 24, 1);
    data.extend_from_slice(&[0; 16]);

    assert!(read_bmp(Cursor::new(data)).is_err());
}

#[test]
fn rejects_truncated_pixel_data() {
    let mut data = headers(b"BM", 2, 2, 24, 0);
    data.extend_from_slice(&[3, 2, 1]); // 1 行にも満たない

    assert!(read_bmp(Cursor::new(data)).is_err());
}
