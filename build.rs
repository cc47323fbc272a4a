fn main() {
  compile_backend_header();
}

fn compile_backend_header() {
  let crate_name = std::env::var("CARGO_PKG_NAME").unwrap();
  let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
  let header_dir = std::path::PathBuf::from(&crate_dir).join("lib");
  let header_path = header_dir.join(format!("{}.h", crate_name));

  std::fs::create_dir_all(&header_dir).expect("Failed to create header directory");

  cbindgen::Builder::new()
    .with_crate(crate_dir)
    .with_language(cbindgen::Language::C)
    .with_include_guard("PRIMOPS_H")
    .generate()
    .expect("Unable to generate bindings")
    .write_to_file(header_path);

  println!("cargo:rerun-if-changed=backend");
}
