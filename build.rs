#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/bmitracker.ico must exist for Windows builds
    let mut res = WindowsResource::new();
    res.set_icon("res/bmitracker.ico")
        .set("FileDescription", "bmitracker CLI")
        .set("ProductName", "bmitracker")
        .set("OriginalFilename", "bmitracker.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
