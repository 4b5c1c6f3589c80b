#![allow(dead_code)]

use async_trait::async_trait;
use girus::platform::ContainerRuntime;
use girus::runtime::probe::RuntimeProbe;

pub struct FakeProbe {
    pub installed: Vec<ContainerRuntime>,
    pub running: Vec<ContainerRuntime>,
}

#[async_trait]
impl RuntimeProbe for FakeProbe {
    async fn is_installed(&self, runtime: ContainerRuntime) -> bool {
        self.installed.contains(&runtime)
    }

    async fn is_running(&self, runtime: ContainerRuntime) -> bool {
        self.running.contains(&runtime)
    }
}

pub fn nothing_installed() -> FakeProbe {
    FakeProbe {
        installed: vec![],
        running: vec![],
    }
}

pub fn installed_stopped(runtime: ContainerRuntime) -> FakeProbe {
    FakeProbe {
        installed: vec![runtime],
        running: vec![],
    }
}

pub fn running(runtime: ContainerRuntime) -> FakeProbe {
    FakeProbe {
        installed: vec![runtime],
        running: vec![runtime],
    }
}

pub fn probe(installed: &[ContainerRuntime], running: &[ContainerRuntime]) -> FakeProbe {
    FakeProbe {
        installed: installed.to_vec(),
        running: running.to_vec(),
    }
}

pub fn output_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output is utf-8")
}
