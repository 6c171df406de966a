//! Boot-time namespace contents.

use homeos_vfs::{DirId, Namespace};

/// Populate a fresh namespace with the stock HomeOS layout and return the
/// session's home directory.
pub fn populate_namespace(ns: &mut Namespace) -> DirId {
    let root = ns.root();

    let home = ns.create_dir(root, "home").unwrap();
    let bin = ns.create_dir(root, "bin").unwrap();
    let etc = ns.create_dir(root, "etc").unwrap();
    let var = ns.create_dir(root, "var").unwrap();

    let user = ns.create_dir(home, "user").unwrap();
    ns.create_dir(home, "guest").unwrap();
    ns.create_file(home, "profile.txt").unwrap();

    for cmd in [
        "echo", "clear", "ls", "help", "exit", "date", "sysinfo", "mkdir", "touch", "whoami",
    ] {
        ns.create_file(bin, cmd).unwrap();
    }

    ns.create_file(etc, "passwd").unwrap();
    ns.create_file(etc, "hosts").unwrap();
    ns.create_file(var, "log.txt").unwrap();

    let documents = ns.create_dir(user, "documents").unwrap();
    ns.create_dir(user, "downloads").unwrap();
    ns.create_file(user, "welcome.txt").unwrap();
    ns.create_file(documents, "my_document.txt").unwrap();

    log::debug!("namespace seeded with {} directories", ns.dir_count());
    home
}
