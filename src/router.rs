use crate::error::TemplateError;
use crate::params::Params;
use crate::path;
use crate::template::CompiledTemplate;

/// A router that matches request paths against registered path templates
/// and returns every match along with the extracted parameter values.
///
/// The destination type `T` is opaque payload: the router stores it at
/// registration, hands out references to it on a match, and never inspects
/// or mutates it.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use routeset::Router;
///
/// let mut router = Router::new();
/// router.add("/files/{name}", "file")?;
/// router.add("/files/**", "fallback")?;
///
/// // both routes match, in registration order
/// let matched = router.destinations("/files/report.pdf");
/// assert_eq!(matched.len(), 2);
/// assert_eq!(matched[0].params.get("name"), Some("report.pdf"));
/// # Ok(())
/// # }
/// ```
pub struct Router<T> {
    routes: Vec<Route<T>>,
}

/// One entry in the route table: the template as registered, its compiled
/// form, and the destination bound to it.
struct Route<T> {
    template: String,
    compiled: CompiledTemplate,
    destination: T,
}

/// A single route matched by [`Router::destinations`]: the destination
/// bound at registration and the parameter values extracted from the path.
///
/// Produced fresh per lookup; the router retains nothing about past
/// matches.
#[derive(Debug)]
pub struct RouteMatch<'router, T> {
    /// A reference to the destination registered for the matched template.
    pub destination: &'router T,
    /// The values captured by the template's named parameters.
    pub params: Params<'router>,
}

impl<T> Router<T> {
    /// Constructs an empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a path template with its destination.
    ///
    /// Routes are append-only and keep registration order, which is also
    /// the order matches are returned in. A rejected template leaves the
    /// table untouched.
    pub fn add(&mut self, template: &str, destination: T) -> Result<(), TemplateError> {
        let compiled = CompiledTemplate::compile(template)?;
        debug!(
            "registered route '{}' as '{}'",
            template,
            compiled.pattern().as_str()
        );
        self.routes.push(Route {
            template: template.to_owned(),
            compiled,
            destination,
        });
        Ok(())
    }

    /// Returns every registered route matching the given request path, in
    /// registration order.
    ///
    /// The path is normalized (slash runs collapsed, one trailing slash
    /// stripped) and then tried against each compiled template as a
    /// full-string match. No match is signaled by an empty vector, never an
    /// error; 404-style handling belongs to the caller, as does any
    /// precedence policy between overlapping routes.
    pub fn destinations(&self, request_path: &str) -> Vec<RouteMatch<'_, T>> {
        let request_path = path::normalize(request_path);

        let mut matched = Vec::new();
        for route in &self.routes {
            if let Some(caps) = route.compiled.pattern().captures(&request_path) {
                let mut params = Params::new();
                for (i, name) in route.compiled.names().iter().enumerate() {
                    // group i + 1 belongs to name i; a group that did not
                    // participate in the match captures the empty string
                    let value = caps.get(i + 1).map_or("", |m| m.as_str());
                    params.push(name, value.to_owned());
                }
                matched.push(RouteMatch {
                    destination: &route.destination,
                    params,
                });
            }
        }
        matched
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes have been registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the registered templates in registration order, as given at
    /// registration (before normalization). Useful for startup diagnostics.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.template.as_str())
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
