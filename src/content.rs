// User-facing text for the `create` command. Kept verbatim; the catalog
// returns these slices untouched.

pub const CREATE_CMD_SHORT: &str = "Cria o cluster Girus";

pub const CREATE_CLUSTER_CMD_SHORT: &str = "Cria um cluster Girus";
pub const CREATE_CLUSTER_CMD_LONG: &str = "Cria um cluster Kind com o nome \"girus\" e implanta todos os componentes necessários. Por padrão, o deployment embutido no binário é utilizado.";

pub const DOCKER_MACOS_INSTRUCTIONS: &str = r#"
Para macOS, recomendamos usar Colima (alternativa leve ao Docker Desktop):
1. Instale o Homebrew caso não tenha:
  /bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)"
2. Instale o Colima e o Docker CLI:
  brew install colima docker
3. Inicie o Colima:
  colima start
Alternativamente, você pode instalar o Docker Desktop para macOS de:
https://www.docker.com/products/docker-desktop
"#;

pub const DOCKER_LINUX_INSTRUCTIONS: &str = "
1. Para Linux, use o script de instalação oficial:
  curl -fsSL https://get.docker.com | bash
2. Após a instalação, adicione seu usuário ao grupo docker para evitar usar sudo:
  sudo usermod -aG docker $USER
  newgrp docker
3. Inicie o serviço:
  sudo systemctl enable docker
  sudo systemctl start docker
";

pub const PODMAN_MACOS_INSTRUCTIONS: &str = r#"
Para macOS, recomendamos Podman:
1. Instale o Homebrew caso não tenha:
  /bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)"
2. Instale o Podman
  brew install podman
3. Inicie o Podman:
  podman machine init
  podman machine start
"#;

pub const PODMAN_LINUX_INSTRUCTIONS: &str = "
1. Para Linux, use o script de instalação oficial:
  curl -fsSL https://get.docker.com | bash
2. E inicie o serviço:
  sudo systemctl enable podman
  sudo systemctl start podman
3. Opicional: Após a instalação, para utilizar podman, rootless evitando sudo:
  Siga as instruções do site oficial:
  https://github.com/containers/podman/blob/main/docs/tutorials/rootless_tutorial.md
";

pub const PODMAN_WINDOWS_INSTRUCTIONS: &str = "
Visite https://github.com/containers/podman/blob/main/docs/tutorials/podman-for-windows.md para instruções de instalação para seu sistema operacional
";

pub const OTHER_OS_INSTRUCTIONS: &str = "
Visite https://www.docker.com/products/docker-desktop para instruções de instalação para seu sistema operacional
";

pub const DOCKER_START_HINT_MACOS: &str = "
Para macOS com Colima:
  colima start
Para Docker Desktop:
  Inicie o aplicativo Docker Desktop
";

pub const PODMAN_START_HINT_MACOS: &str = "
Para Podman:
\tInicie a machine com: podman machine start
";

pub const DOCKER_START_HINT_LINUX: &str = "
Inicie o serviço Docker:
  sudo systemctl start docker
";

pub const PODMAN_START_HINT_LINUX: &str = "
Para Podman:
  sudo systemctl start podman
";

pub const HEADER_TITLE: &str = "GIRUS CREATE";
pub const HEADER_STATUS: &str = "Verificando atualizações...";
