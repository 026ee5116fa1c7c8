use parse_mystery::Canvas;
use parse_mystery::config::config;

fn main() {
    // A big yellow image, painted pixel by pixel
    let mut canvas = Canvas::blank(400, 200);
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            canvas.set_rgb(x, y, 255, 255, 0).expect("coordinate inside canvas");
        }
    }

    match canvas.show(config()) {
        Ok(path) => println!("wrote {}", path.display()),
        Err(err) => {
            eprintln!("yellow: {err}");
            std::process::exit(1);
        }
    }
}
