//! Test fixtures and constants.

/// Stand-in for sops.
///
/// "Encrypts" by prefixing `ENC:` and "decrypts" by stripping it. Refuses
/// any file containing `FAIL`. Each encrypt/decrypt call is appended to
/// `calls.log` next to the script; type hints are echoed on stderr.
pub const FAKE_SOPS: &str = r#"#!/bin/sh
mode=""
file=""
while [ $# -gt 0 ]; do
  case "$1" in
    --version) echo "sops 3.9.0 (fake)"; exit 0 ;;
    --input-type|--output-type) echo "type=$2" >&2; shift ;;
    -e) mode=encrypt; file="$2"; shift ;;
    -d) mode=decrypt; file="$2"; shift ;;
  esac
  shift
done
if grep -q FAIL "$file"; then
  echo "fake sops: cannot process $file" >&2
  exit 1
fi
echo "$mode $file" >> "$(dirname "$0")/calls.log"
case "$mode" in
  encrypt) printf 'ENC:'; cat "$file" ;;
  decrypt) tail -c +5 "$file" ;;
esac
"#;

/// Sample dotenv plaintext.
pub const SAMPLE_ENV: &str = "DATABASE_URL=postgres://localhost/mydb\nAPI_KEY=sk-test-12345\n";

/// Sample JSON plaintext.
pub const SAMPLE_JSON: &str = "{\"token\": \"super-secret\"}\n";

/// Unrelated `.gitignore` content that must survive untouched.
pub const EXISTING_GITIGNORE: &str = "# build output\ntarget/\n\n*.log\n";
