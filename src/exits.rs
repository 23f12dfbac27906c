//! Process hardening and exit codes.

use std::process::ExitCode;

/// Conventional failure status, shared by every error kind.
const FAILURE: u8 = 1;

/// Keep the generated secret out of core dumps and away from ptrace by
/// other non-root processes. Call before anything secret is produced.
pub fn harden() {
    #[cfg(target_os = "linux")]
    {
        let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) };
        if rc != 0 {
            log::warn!("prctl(PR_SET_DUMPABLE) failed; process stays dumpable");
        }
    }

    let no_core = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    if unsafe { libc::setrlimit(libc::RLIMIT_CORE, &no_core) } != 0 {
        log::warn!("setrlimit(RLIMIT_CORE) failed; core dumps stay enabled");
    } else {
        log::debug!("core dumps disabled");
    }
}

pub fn failure() -> ExitCode {
    ExitCode::from(FAILURE)
}
