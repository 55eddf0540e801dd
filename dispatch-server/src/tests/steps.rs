//! Behaviour-driven step definitions driving the serve command scenarios.

use super::helpers::{LayerOverrides, compose_layers};
use super::*;
use crate::serve::{ServeConfig, config_from_layers_for_test};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::net::SocketAddr;

/// Aggregates serve command scenario state so each step only needs a single
/// world argument.
#[derive(Debug, Default)]
struct ServeWorld {
    cli_args: RefCell<Vec<String>>,
    config_layer: RefCell<Option<LayerOverrides>>,
    env_layer: RefCell<Option<LayerOverrides>>,
    cli_result: RefCell<Option<Result<ServeConfig, CliError>>>,
}

#[fixture]
fn world() -> ServeWorld {
    ServeWorld::default()
}

#[given("no listen configuration is provided")]
fn no_configuration(#[from(world)] world: &ServeWorld) {
    world.cli_args.borrow_mut().clear();
    world.config_layer.replace(None);
    world.env_layer.replace(None);
}

#[given("I pass the CLI flags {flags}")]
fn cli_flags(#[from(world)] world: &ServeWorld, flags: String) {
    world
        .cli_args
        .borrow_mut()
        .extend(flags.split_whitespace().map(str::to_owned));
}

#[given("the config file sets host {host} and port {port}")]
fn config_file_layer(#[from(world)] world: &ServeWorld, host: String, port: u16) {
    world.config_layer.replace(Some(LayerOverrides {
        host: Some(host),
        port: Some(port),
    }));
}

#[given("the environment sets port {port}")]
fn environment_layer(#[from(world)] world: &ServeWorld, port: u16) {
    world.env_layer.replace(Some(LayerOverrides {
        host: None,
        port: Some(port),
    }));
}

#[when("I configure the serve command")]
fn configure_serve(#[from(world)] world: &ServeWorld) {
    let mut invocation = vec!["dispatch".to_owned(), "serve".to_owned()];
    invocation.extend(world.cli_args.borrow().iter().cloned());
    let file_layer = world.config_layer.borrow().clone();
    let env_layer = world.env_layer.borrow().clone();
    let outcome = Cli::try_parse_from(invocation)
        .map_err(CliError::ArgumentParsing)
        .and_then(|cli| match cli.command {
            Command::Serve(args) => {
                let composer = compose_layers(&args, file_layer.as_ref(), env_layer.as_ref());
                config_from_layers_for_test(composer.layers())
            }
        });
    world.cli_result.replace(Some(outcome));
}

#[then("the server listens on {address}")]
fn listens_on(#[from(world)] world: &ServeWorld, address: String) {
    let expected: SocketAddr = address.parse().expect("scenario address is valid");
    let borrowed = world.cli_result.borrow();
    let config = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");
    assert_eq!(config.listen, expected);
}

#[then("the CLI reports an invalid listen address")]
fn reports_invalid_address(#[from(world)] world: &ServeWorld) {
    let borrowed = world.cli_result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::InvalidListenAddress { field, .. } => assert_eq!(*field, ARG_HOST),
        other => panic!("unexpected error {other:?}"),
    }
}

macro_rules! register_serve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/serve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ServeWorld) {
            let _ = world;
        }
    };
}

register_serve_scenario!(default_listen_address, "using the default listen address");
register_serve_scenario!(cli_port_override, "overriding the port with a CLI flag");
register_serve_scenario!(
    layering_cli_config_env,
    "layering CLI, config file, and environment values"
);
register_serve_scenario!(rejecting_invalid_host, "rejecting an invalid host");
