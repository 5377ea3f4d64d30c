// Wed Jan 15 2026 - Alex

pub use super::args::Command;

use super::args::{DecodeArgs, EncodeArgs, InspectArgs, LayoutArgs};
use crate::config::Config;
use crate::memory::{MemoryRegion, MmapStorage};
use crate::net::{InetLayouts, SockAddr};
use crate::structure::{LayoutRegistry, SerializableLayout, StructLayout};
use crate::utils::hex;
use crate::utils::logging::ScopedTimer;
use crate::view::{HasView, StructMapper};
use anyhow::Context as _;
use colored::Colorize;
use std::sync::Arc;

/// State shared by every command: configuration and the layouts built from it.
pub struct Context {
    pub config: Config,
    pub layouts: InetLayouts,
    pub registry: LayoutRegistry,
}

impl Context {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let layouts = InetLayouts::new(config.wire_order).context("building socket address layouts")?;
        let registry = LayoutRegistry::new();
        layouts.register(&registry);
        Ok(Self {
            config,
            layouts,
            registry,
        })
    }

    pub fn layout(&self, name: &str) -> anyhow::Result<Arc<StructLayout>> {
        self.registry.get(name).ok_or_else(|| {
            anyhow::anyhow!("unknown layout {} (known: {})", name, self.registry.names().join(", "))
        })
    }
}

pub trait CommandExecutor {
    fn execute(&self, ctx: &Context) -> anyhow::Result<()>;
    fn name(&self) -> &'static str;
}

impl CommandExecutor for LayoutArgs {
    fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let Some(name) = &self.name else {
            for name in ctx.registry.names() {
                let layout = ctx.layout(&name)?;
                println!("{:<16} {:>4} bytes  {}", name.cyan(), layout.size(), layout.kind());
            }
            return Ok(());
        };

        let layout = ctx.layout(name)?;
        if self.json {
            println!("{}", SerializableLayout::from(layout.as_ref()).to_json()?);
        } else {
            print!("{}", layout);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "layout"
    }
}

impl DecodeArgs {
    pub fn decode(&self, ctx: &Context) -> anyhow::Result<SockAddr> {
        let bytes = hex::parse(&self.hex).ok_or_else(|| anyhow::anyhow!("invalid hex input: {}", self.hex))?;
        let region = MemoryRegion::from_bytes(&bytes);
        Ok(SockAddr::from_region(&ctx.layouts, region).context("decoding socket address")?)
    }
}

impl CommandExecutor for DecodeArgs {
    fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        let addr = self.decode(ctx)?;
        println!("{} {}", addr.family().to_string().cyan(), addr.to_socket_addr()?.to_string().green().bold());
        println!("{:#?}", addr.view());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "decode"
    }
}

impl EncodeArgs {
    pub fn render(&self, ctx: &Context) -> anyhow::Result<String> {
        let addr = SockAddr::encode(&ctx.layouts, &self.address)?;
        let bytes = addr.to_bytes()?;
        if self.spaced {
            Ok(hex::encode_spaced(&bytes))
        } else {
            Ok(hex::encode(&bytes))
        }
    }
}

impl CommandExecutor for EncodeArgs {
    fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        println!("{}", self.render(ctx)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "encode"
    }
}

impl CommandExecutor for InspectArgs {
    fn execute(&self, ctx: &Context) -> anyhow::Result<()> {
        self.validate().map_err(|e| anyhow::anyhow!(e))?;
        let _timer = ScopedTimer::new("inspect");

        let storage = MmapStorage::open(&self.file).with_context(|| format!("mapping {}", self.file.display()))?;
        let region = MemoryRegion::new(Arc::new(storage));
        let name = self.layout.as_deref().unwrap_or(&ctx.config.default_layout);
        let mapper = StructMapper::new(ctx.layout(name)?);

        let window = region
            .slice_from(self.offset)
            .with_context(|| format!("offset {} is outside {}", self.offset, self.file.display()))?;
        let views = mapper.elements(&window, self.count)?;

        for (i, view) in views.iter().enumerate() {
            println!(
                "{} {} @ +{:#x}",
                format!("[{}]", i).blue(),
                name.cyan(),
                self.offset + i * mapper.layout().size()
            );
            println!("{:#?}", view);
            for line in hex::dump(&view.to_bytes()?, view.address(), ctx.config.dump_width) {
                println!("  {}", line.dimmed());
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::ByteOrder;
    use crate::net::AddressFamily;
    use std::net::SocketAddr;

    fn context() -> Context {
        Context::new(Config::default()).unwrap()
    }

    #[test]
    fn test_encode_then_decode() {
        let ctx = context();
        for text in ["[fe80::1]:8080", "10.0.0.7:53"] {
            let address: SocketAddr = text.parse().unwrap();
            let encoded = EncodeArgs { address, spaced: true }.render(&ctx).unwrap();

            let decoded = DecodeArgs { hex: encoded }.decode(&ctx).unwrap();
            assert_eq!(decoded.to_socket_addr().unwrap(), address);
        }
    }

    #[test]
    fn test_encode_port_follows_wire_order() {
        let address: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let args = EncodeArgs { address, spaced: false };

        let network = args.render(&context()).unwrap();
        assert_eq!(&network[4..8], "1f90");

        let little = Context::new(Config::default().with_wire_order(ByteOrder::Little)).unwrap();
        assert_eq!(&args.render(&little).unwrap()[4..8], "901f");
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let ctx = context();
        assert!(DecodeArgs { hex: "xyz".to_string() }.decode(&ctx).is_err());

        let mut image = vec![0u8; 16];
        image[1] = 0xEE;
        let err = DecodeArgs { hex: hex::encode(&image) }.decode(&ctx).unwrap_err();
        assert!(err.chain().any(|e| e.to_string().contains("Unsupported address family")));

        image[1] = AddressFamily::Inet.as_raw();
        assert!(DecodeArgs { hex: hex::encode(&image) }.decode(&ctx).is_ok());
    }

    #[test]
    fn test_layout_lookup() {
        let ctx = context();
        assert_eq!(ctx.layout("sockaddr_in6").unwrap().size(), 28);
        assert!(ctx.layout("sockaddr_un").is_err());

        let args = LayoutArgs { name: Some("in6_addr".to_string()), json: true };
        assert!(args.execute(&ctx).is_ok());
        assert!(LayoutArgs { name: Some("nope".to_string()), json: false }.execute(&ctx).is_err());
    }

    #[test]
    fn test_inspect_mapped_file() {
        let ctx = context();
        let address: SocketAddr = "[::1]:22".parse().unwrap();
        let encoded = SockAddr::encode(&ctx.layouts, &address).unwrap().to_bytes().unwrap();

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [vec![0u8; 4], encoded].concat()).unwrap();

        let inspect = |offset, count| InspectArgs {
            file: file.path().to_path_buf(),
            offset,
            layout: None,
            count,
        };
        assert!(inspect(4, 1).execute(&ctx).is_ok());
        assert!(inspect(8, 1).execute(&ctx).is_err());
        assert!(inspect(4, 0).execute(&ctx).is_err());
        assert!(inspect(64, 1).execute(&ctx).is_err());
    }
}
