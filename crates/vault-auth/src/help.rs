//! Help text for the `auth` command.

pub const SYNOPSIS: &str = "Prints information about how to authenticate with Vault";

pub const HELP: &str = r#"
Usage: vault auth [options] [token]

  Authenticate with Vault with the given token or via any supported
  authentication backend.

  If no --method is specified, then the token is expected. If it is not
  given on the command-line, it will be asked via user input. Reading
  the token from stdin ("-") is not supported.

  By specifying --method, alternate authentication methods can be
  requested. No alternate method is available in this client yet, so
  this always fails. It is an error to specify a token with --method.

General Options:

  --address=addr          The address of the Vault server.
                          Defaults to $VAULT_ADDR or https://127.0.0.1:8200.

  --ca-cert=path          Path to a PEM encoded CA cert file to use to
                          verify the Vault server SSL certificate.

  --ca-path=path          Path to a directory of PEM encoded CA cert files
                          to verify the Vault server SSL certificate. If both
                          --ca-cert and --ca-path are specified, --ca-path is used.

  --insecure              Do not verify TLS certificate. This is highly
                          not recommended.

Auth Options:

  --method=name    Authenticate using the named method of the remote
                   server. If this authentication method is not available,
                   exit with code 1.

  --methods        List the available auth methods.
"#;
