use std::path::Path;

/// Write a small solid-color PNG so asset lookups and decoding succeed.
pub fn write_test_png(path: &Path) {
    let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([40, 90, 160, 255]));
    img.save(path).expect("write test png");
}
