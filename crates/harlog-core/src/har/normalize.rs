use super::options::ProtocolRelative;
use super::types::Har;
use crate::{Error, Result};
use url::Url;

/// Rewrite every origin-relative `redirectURL` into an absolute URL.
///
/// A redirect is partial when it starts with `/`. It is resolved against the
/// URL of the request in the same entry. Empty and already-absolute redirects
/// are left untouched. Returns the number of entries rewritten.
pub fn normalize_redirects(har: &mut Har, protocol_relative: ProtocolRelative) -> Result<usize> {
    let mut rewritten = 0;

    for (idx, entry) in har.log.entries.iter_mut().enumerate() {
        if !entry.response.redirect_url.starts_with('/') {
            continue;
        }

        let request_url = Url::parse(&entry.request.url).map_err(|e| {
            Error::invalid(format!(
                "Entry {} has a relative redirect but its request URL '{}' is not absolute: {}",
                idx, entry.request.url, e
            ))
        })?;

        let resolved =
            resolve_partial_redirect(&request_url, &entry.response.redirect_url, protocol_relative)
                .ok_or_else(|| {
                    Error::invalid(format!(
                        "Entry {} has a relative redirect '{}' that cannot be resolved against '{}'",
                        idx, entry.response.redirect_url, entry.request.url
                    ))
                })?;

        tracing::debug!(
            "Entry {}: redirect '{}' resolved to '{}'",
            idx,
            entry.response.redirect_url,
            resolved
        );

        entry.response.redirect_url = resolved;
        rewritten += 1;
    }

    Ok(rewritten)
}

/// Resolve a redirect starting with `/` against the request URL that produced
/// it. Returns `None` when the request URL has no host to borrow or the
/// result is not an absolute URL.
pub fn resolve_partial_redirect(
    request_url: &Url,
    redirect: &str,
    protocol_relative: ProtocolRelative,
) -> Option<String> {
    let resolved = if redirect.starts_with("//")
        && protocol_relative == ProtocolRelative::ResolveScheme
    {
        format!("{}:{}", request_url.scheme(), redirect)
    } else {
        prefix_authority(request_url, redirect)?
    };

    Url::parse(&resolved).ok()?;
    Some(resolved)
}

fn prefix_authority(request_url: &Url, redirect: &str) -> Option<String> {
    let authority = authority(request_url)?;

    // Some producers have written absolute URIs here; only their path is kept.
    let suffix = match Url::parse(redirect) {
        Ok(absolute) => absolute.path().to_string(),
        Err(_) => redirect.to_string(),
    };

    Some(format!("{}{}", authority, suffix))
}

/// Scheme, host and non-default port of a URL, e.g. `http://example.com:8080`.
/// `None` for URLs without a host such as `data:`.
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(request: &str, redirect: &str, mode: ProtocolRelative) -> Option<String> {
        resolve_partial_redirect(&Url::parse(request).unwrap(), redirect, mode)
    }

    #[test]
    fn test_resolve_keeps_non_default_port() {
        assert_eq!(
            resolve(
                "http://example.com:8080/old",
                "/new/path",
                ProtocolRelative::default()
            )
            .as_deref(),
            Some("http://example.com:8080/new/path")
        );
    }

    #[test]
    fn test_resolve_drops_default_port() {
        assert_eq!(
            resolve(
                "https://example.com:443/old",
                "/new",
                ProtocolRelative::default()
            )
            .as_deref(),
            Some("https://example.com/new")
        );
    }

    #[test]
    fn test_resolve_keeps_query_and_fragment_verbatim() {
        assert_eq!(
            resolve(
                "https://example.com/login?next=1",
                "/home?tab=a%20b#top",
                ProtocolRelative::default()
            )
            .as_deref(),
            Some("https://example.com/home?tab=a%20b#top")
        );
    }

    #[test]
    fn test_resolve_ignores_request_path_and_userinfo() {
        assert_eq!(
            resolve(
                "https://user:pw@example.com/a/b/c?q=1",
                "/d",
                ProtocolRelative::default()
            )
            .as_deref(),
            Some("https://example.com/d")
        );
    }

    #[test]
    fn test_resolve_ipv6_host() {
        assert_eq!(
            resolve("http://[::1]:3000/", "/x", ProtocolRelative::default()).as_deref(),
            Some("http://[::1]:3000/x")
        );
    }

    #[test]
    fn test_protocol_relative_resolves_scheme_only() {
        assert_eq!(
            resolve(
                "https://orighost.test/start",
                "//cdn.test/asset.js",
                ProtocolRelative::ResolveScheme
            )
            .as_deref(),
            Some("https://cdn.test/asset.js")
        );
    }

    #[test]
    fn test_protocol_relative_prefix_authority() {
        assert_eq!(
            resolve(
                "http://orighost.test/start",
                "//cdn.test/asset.js",
                ProtocolRelative::PrefixAuthority
            )
            .as_deref(),
            Some("http://orighost.test//cdn.test/asset.js")
        );
    }

    #[test]
    fn test_bare_double_slash_is_not_resolved() {
        // "http://" has an empty host and is not an absolute URL
        assert_eq!(
            resolve("http://a.test/x", "//", ProtocolRelative::ResolveScheme),
            None
        );
    }

    #[test]
    fn test_triple_slash_resolves_to_parseable_url() {
        let resolved = resolve("http://a.test/x", "///x", ProtocolRelative::ResolveScheme).unwrap();

        assert_eq!(resolved, "http:///x");
        assert_eq!(Url::parse(&resolved).unwrap().host_str(), Some("x"));
    }

    #[test]
    fn test_bare_double_slash_prefix_authority() {
        assert_eq!(
            resolve("http://a.test/x", "//", ProtocolRelative::PrefixAuthority).as_deref(),
            Some("http://a.test//")
        );
    }

    #[test]
    fn test_authority_of_hostless_url() {
        assert_eq!(authority(&Url::parse("data:text/plain,hi").unwrap()), None);
        assert_eq!(
            authority(&Url::parse("https://example.com:8443/a").unwrap()).as_deref(),
            Some("https://example.com:8443")
        );
    }

    #[test]
    fn test_request_without_host_cannot_resolve() {
        assert_eq!(
            resolve("data:text/plain,hello", "/x", ProtocolRelative::default()),
            None
        );
    }
}
