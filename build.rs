fn main() {
    // Embed version metadata into the Windows executable so the binary shows
    // proper details in Explorer and the Task Manager.
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set("ProductName", "DeskBreak");
        res.set("FileDescription", "DeskBreak sedentary break reminder");
        if let Err(e) = res.compile() {
            println!("cargo:warning=failed to embed Windows resources: {}", e);
        }
    }
}
